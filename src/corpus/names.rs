// First and middle names match `[A-Z][a-z]+(-[A-Z][a-z]+)?`, last names `[A-Z]['a-zA-Z]+`.

pub(crate) const MALE_FIRST_NAMES: &[&str] = &[
    "Aaron", "Adam", "Alexander", "Andreas", "Anthony", "Arthur", "Ben", "Bernd", "Bruno", "Carl",
    "Christian", "Daniel", "David", "Dieter", "Edward", "Emil", "Eric", "Felix", "Frank", "Frederik",
    "George", "Gregor", "Hans", "Hans-Peter", "Harold", "Henry", "Jack", "Jacob", "James",
    "Jean-Luc", "Joachim", "John", "Jonas", "Joseph", "Karl", "Karl-Heinz", "Kevin", "Lars", "Leon",
    "Lukas", "Marcus", "Mark", "Martin", "Matthew", "Max", "Michael", "Nathan", "Nicholas", "Noah",
    "Oliver", "Oscar", "Patrick", "Paul", "Peter", "Philip", "Ralf", "Richard", "Robert", "Samuel",
    "Sebastian", "Stefan", "Steven", "Thomas", "Timothy", "Tobias", "Victor", "Walter", "William",
];

pub(crate) const FEMALE_FIRST_NAMES: &[&str] = &[
    "Ada", "Alice", "Amanda", "Amelie", "Andrea", "Angela", "Anna", "Anne-Marie", "Barbara",
    "Beatrice", "Carla", "Caroline", "Catherine", "Charlotte", "Christina", "Clara", "Diana",
    "Dorothy", "Elena", "Elisabeth", "Emily", "Emma", "Eva", "Frieda", "Grace", "Hanna", "Heidi",
    "Helen", "Ida", "Ingrid", "Irene", "Jane", "Jennifer", "Julia", "Karen", "Katharina", "Laura",
    "Lea", "Linda", "Lisa", "Lotte", "Margaret", "Maria", "Marie-Claire", "Martha", "Mary-Jane",
    "Mia", "Monika", "Nancy", "Nina", "Olivia", "Paula", "Rebecca", "Rosa", "Ruth", "Sabine",
    "Sandra", "Sarah", "Sophie", "Susan", "Tanja", "Ulrike", "Ursula", "Victoria", "Wilma", "Yvonne",
];

pub(crate) const NEUTRAL_FIRST_NAMES: &[&str] = &[
    "Alex", "Ashley", "Avery", "Casey", "Charlie", "Dana", "Eden", "Finley", "Jamie", "Jordan",
    "Kai", "Kim", "Morgan", "Quinn", "Riley", "Robin", "Sam", "Sascha", "Taylor", "Toni",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Adams", "Albrecht", "Anderson", "Bauer", "Becker", "Brown", "Campbell", "Clark", "D'Angelo",
    "D'Souza", "DeVries", "Davis", "Evans", "Fischer", "Fitzgerald", "Garcia", "Hartmann", "Hill",
    "Hoffmann", "Jackson", "Johnson", "Jones", "Keller", "King", "Klein", "Koch", "Lange", "Lee",
    "Lewis", "MacLeod", "Martin", "McDonald", "McKenzie", "Meyer", "Miller", "Moore", "Mueller",
    "Nelson", "O'Brien", "O'Connor", "O'Neill", "Parker", "Richter", "Roberts", "Schmidt",
    "Schneider", "Schulz", "Scott", "Smith", "Taylor", "Thompson", "Vandenberg", "Wagner", "Walker",
    "Weber", "White", "Williams", "Wilson", "Wolf", "Wright", "Young", "Zimmermann",
];
