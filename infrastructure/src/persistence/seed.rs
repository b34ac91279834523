//! Starter data for an empty question bank and drink catalog.

use super::connection::Database;
use super::drink_repository::encode_recipe;
use super::error::StoreError;
use rusqlite::{Transaction, params};
use tracing::info;
use trivia_domain::Ingredient;

/// `(id, label)`
pub const STARTER_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// `(question, answer, category, difficulty)`
pub const STARTER_QUESTIONS: [(&str, &str, i64, i32); 19] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

/// `(title, [(name, color, parts)])`
pub const STARTER_DRINKS: [(&str, &[(&str, &str, u32)]); 1] =
    [("water", &[("water", "blue", 1)])];

/// What [`seed_if_empty`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
    pub drinks: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.categories == 0 && self.questions == 0 && self.drinks == 0
    }
}

/// Load the starter data in a single transaction. The question bank is only
/// seeded when it has no categories and no questions; the drink catalog only
/// when it has no drinks.
pub async fn seed_if_empty(db: &Database) -> Result<SeedReport, StoreError> {
    let report = db
        .transaction_async(|tx| {
            let (categories, questions) = seed_question_bank(tx)?;
            let drinks = seed_drinks(tx)?;
            Ok(SeedReport {
                categories,
                questions,
                drinks,
            })
        })
        .await?;

    if report.is_empty() {
        info!("Database already has data; skipping seed");
    } else {
        info!(
            "Seeded {} categories, {} questions and {} drinks",
            report.categories, report.questions, report.drinks
        );
    }
    Ok(report)
}

fn seed_question_bank(tx: &Transaction) -> Result<(usize, usize), StoreError> {
    let existing: i64 = tx.query_row(
        "SELECT (SELECT COUNT(*) FROM categories) + (SELECT COUNT(*) FROM questions)",
        [],
        |row| row.get(0),
    )?;
    if existing > 0 {
        return Ok((0, 0));
    }

    for (id, label) in STARTER_CATEGORIES {
        tx.execute(
            "INSERT INTO categories (id, type) VALUES (?1, ?2)",
            params![id, label],
        )?;
    }
    for (question, answer, category, difficulty) in STARTER_QUESTIONS {
        tx.execute(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
            params![question, answer, category, difficulty],
        )?;
    }
    Ok((STARTER_CATEGORIES.len(), STARTER_QUESTIONS.len()))
}

fn seed_drinks(tx: &Transaction) -> Result<usize, StoreError> {
    let existing: i64 = tx.query_row("SELECT COUNT(*) FROM drinks", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    for (title, recipe) in STARTER_DRINKS {
        let recipe: Vec<Ingredient> = recipe
            .iter()
            .map(|(name, color, parts)| Ingredient {
                name: name.to_string(),
                color: color.to_string(),
                parts: *parts,
            })
            .collect();
        tx.execute(
            "INSERT INTO drinks (title, recipe) VALUES (?1, ?2)",
            params![title, encode_recipe(&recipe)?],
        )?;
    }
    Ok(STARTER_DRINKS.len())
}
