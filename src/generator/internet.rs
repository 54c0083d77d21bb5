use crate::corpus::{TOP_LEVEL_DOMAINS, URL_SCHEMES};
use crate::generator::Generator;

const EMAIL_SEPARATORS: &[&str] = &[".", "_", "-", "+"];

impl Generator {
    /// A domain name matching `^[a-z0-9.-]+\.[a-z]*$`, such as `"quas-odit.io"`.
    pub fn domain(&self) -> String {
        let labels = self.int(1, 2);
        let mut parts = (0..labels).map(|_| self.domain_label()).collect::<Vec<_>>();
        parts.push(self.one_string_of(TOP_LEVEL_DOMAINS));
        parts.join(".")
    }

    /// An `http`, `https` or `ftp` URL on a [`Generator::domain`], with an optional path and
    /// query.
    pub fn url(&self) -> String {
        let mut url = format!("{}://{}", self.one_string_of(URL_SCHEMES), self.domain());
        if self.flip_coin(70) {
            for _ in 0..self.int(1, 3) {
                url.push('/');
                url.push_str(&self.word());
            }
        }
        if self.flip_coin(30) {
            url.push('?');
            url.push_str(&self.word());
            url.push('=');
            url.push_str(&self.pattern("^z^z^z^z^z^z"));
        }
        url
    }

    /// An e-mail address matching `^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]*$`.
    pub fn email(&self) -> String {
        let local = match self.int(0, 3) {
            0 => self.limited_word(3, 10),
            1 => format!(
                "{}{}{}",
                self.limited_word(2, 8),
                self.one_string_of(EMAIL_SEPARATORS),
                self.limited_word(2, 8)
            ),
            2 => format!("{}{}", self.limited_word(2, 8), self.pattern("^0^0")),
            _ => {
                let (first, _, last) = self.name();
                format!("{}.{}", first, last).to_lowercase().replace('\'', "")
            }
        };
        format!("{}@{}", local, self.domain())
    }

    fn domain_label(&self) -> String {
        match self.int(0, 3) {
            0 => format!("{}-{}", self.limited_word(2, 8), self.limited_word(2, 8)),
            1 => format!("{}{}", self.limited_word(3, 10), self.pattern("^1^0")),
            2 => self.pattern("^a^z^z^z^z"),
            _ => self.limited_word(3, 12),
        }
    }
}
