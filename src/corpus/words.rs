/// Lowercase vocabulary for words and sentences. Covers every length from `MIN_WORD_LEN` to
/// `MAX_WORD_LEN`.
pub(crate) const WORDS: &[&str] = &[
    "a", "ab", "accusamus", "accusantium", "ad", "adipisci", "adipiscing", "alias", "aliqua",
    "aliquam", "aliquid", "aliquip", "amet", "anim", "architecto", "asperiores", "aspernatur",
    "assumenda", "atque", "aut", "aute", "autem", "beatae", "blanditiis", "cillum", "commodi",
    "commodo", "consectetur", "consequat", "consequatur", "consequuntur", "corporis", "corrupti",
    "culpa", "cum", "cumque", "cupidatat", "cupiditate", "debitis", "delectus", "deleniti",
    "deserunt", "dicta", "dignissimos", "distinctio", "do", "dolor", "dolore", "dolorem",
    "doloremque", "dolores", "doloribus", "dolorum", "ducimus", "duis", "e", "ea", "earum",
    "eiusmod", "eius", "eligendi", "enim", "eos", "esse", "est", "et", "eu", "eum", "eveniet", "ex",
    "excepteur", "excepturi", "exercitation", "exercitationem", "expedita", "explicabo", "facere",
    "facilis", "fuga", "fugiat", "fugit", "harum", "hic", "id", "illo", "illum", "impedit", "in",
    "incididunt", "incidunt", "inventore", "ipsa", "ipsam", "ipsum", "irure", "iste", "itaque",
    "iure", "iusto", "labore", "laboriosam", "laboris", "laborum", "laudantium", "libero", "lorem",
    "magna", "magnam", "magni", "maiores", "maxime", "minim", "minima", "minus", "modi",
    "molestiae", "molestias", "mollit", "mollitia", "natus", "necessitatibus", "nemo", "neque",
    "nesciunt", "nihil", "nisi", "nobis", "non", "nostrud", "nostrum", "nulla", "numquam", "o",
    "obcaecati", "occaecat", "occaecati", "odio", "odit", "officia", "officiis", "omnis", "optio",
    "pariatur", "perferendis", "perspiciatis", "placeat", "porro", "possimus", "praesentium",
    "provident", "quae", "quaerat", "quam", "quas", "quasi", "qui", "quia", "quibusdam", "quidem",
    "quis", "quisquam", "quo", "quod", "quos", "ratione", "recusandae", "reiciendis", "rem",
    "repellat", "repellendus", "reprehenderit", "repudiandae", "rerum", "saepe", "sapiente", "sed",
    "sequi", "similique", "sint", "sit", "soluta", "sunt", "suscipit", "tempor", "tempora",
    "tempore", "temporibus", "tenetur", "totam", "ullam", "ullamco", "unde", "ut", "vel", "velit",
    "veniam", "veritatis", "vero", "vitae", "voluptas", "voluptate", "voluptatem", "voluptates",
    "voluptatibus", "voluptatum",
];

/// Lowercase suffixes used as the last label of generated domains.
pub(crate) const TOP_LEVEL_DOMAINS: &[&str] = &[
    "com", "org", "net", "info", "io", "dev", "biz", "de", "uk", "fr", "nl", "eu", "example",
];

pub(crate) const URL_SCHEMES: &[&str] = &["http", "https", "ftp"];
