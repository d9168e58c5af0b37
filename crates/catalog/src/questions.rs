use crate::{CatalogEntry, find};

/// Questions a holder may choose when creating a request.
pub const SECURITY_QUESTIONS: &[CatalogEntry] = &[
    CatalogEntry::new("mother_maiden", "What is your mother's maiden name?"),
    CatalogEntry::new("first_pet", "What was the name of your first pet?"),
    CatalogEntry::new("birth_city", "In which city were you born?"),
    CatalogEntry::new(
        "childhood_friend",
        "What is the name of your childhood best friend?",
    ),
    CatalogEntry::new("primary_school", "What is the name of your primary school?"),
    CatalogEntry::new(
        "favorite_teacher",
        "What is the name of your favorite teacher?",
    ),
    CatalogEntry::new("favorite_food", "What is your favorite food?"),
    CatalogEntry::new("nickname", "What was your childhood nickname?"),
];

/// Whether `question` is a security question code.
pub fn is_known_security_question(question: &str) -> bool {
    find(SECURITY_QUESTIONS, question).is_some()
}
