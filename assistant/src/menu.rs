//! Navigation menus keyed by command token.
//!
//! A [`MenuTable`] maps a lower-case token (a button value such as
//! `admissions`) to the builder of its reply. Tokens that are not in the
//! table are questions and go to retrieval.

use std::collections::HashMap;

use crate::api_types::{ButtonKind, ChatResponse, MenuNode};

/// Token of the top-level menu.
pub const INIT_TOKEN: &str = "init";

/// Button value that switches the widget to free-text input.
pub const ASK_AI_VALUE: &str = "ask_ai";

/// Builds the reply for one command token.
pub type MenuBuilder = Box<dyn Fn() -> ChatResponse + Send + Sync>;

/// A category submenu: intro text and the query buttons under it.
struct Submenu {
    token: &'static str,
    text: &'static str,
    queries: &'static [(&'static str, &'static str)],
}

static SUBMENUS: &[Submenu] = &[
    Submenu {
        token: "academic_programs",
        text: "Explore our wide range of academic offerings.",
        queries: &[
            ("Science & Biology", "courses_biology"),
            ("Data Science Programs", "courses_data_science"),
            ("Show All Majors", "courses_general"),
        ],
    },
    Submenu {
        token: "admissions",
        text: "Find out how to join our community.",
        queries: &[
            ("How to Apply", "admissions_undergraduate"),
            ("International Students", "admissions_international"),
            ("Transfer Info", "admissions_transfer"),
        ],
    },
    Submenu {
        token: "tuition",
        text: "Everything you need to know about costs and aid.",
        queries: &[
            ("In-State Tuition", "fees_tuition_in_state"),
            ("Out-of-State Tuition", "fees_tuition_out_of_state"),
            ("Scholarships", "fees_scholarships"),
        ],
    },
    Submenu {
        token: "campus_life",
        text: "Discover life on campus.",
        queries: &[
            ("Housing Options", "campus_life_housing"),
            ("Sports Programs", "campus_life_sports"),
            ("Mental Health Support", "campus_life_mental_health"),
        ],
    },
];

impl Submenu {
    fn build(&self) -> ChatResponse {
        let mut buttons: Vec<MenuNode> = self
            .queries
            .iter()
            .map(|(label, value)| MenuNode::new(*label, *value, ButtonKind::Query))
            .collect();
        buttons.push(MenuNode::new("⬅ Back", INIT_TOKEN, ButtonKind::Category));
        ChatResponse::with_text(self.text, buttons)
    }
}

/// Top-level menu: one button per category plus free-text mode.
pub fn main_menu() -> ChatResponse {
    ChatResponse::buttons_only(vec![
        MenuNode::new("Academic Programs", "academic_programs", ButtonKind::Category),
        MenuNode::new("Admissions", "admissions", ButtonKind::Category),
        MenuNode::new("Tuition & Fees", "tuition", ButtonKind::Category),
        MenuNode::new("Campus Life & Housing", "campus_life", ButtonKind::Category),
        MenuNode::new("Ask a Question", ASK_AI_VALUE, ButtonKind::ModeSwitch),
    ])
}

/// Buttons attached to every generated answer.
pub fn follow_up_buttons() -> Vec<MenuNode> {
    vec![
        MenuNode::new("Ask Another Question", ASK_AI_VALUE, ButtonKind::ModeSwitch),
        MenuNode::new("Main Menu", INIT_TOKEN, ButtonKind::Category),
    ]
}

/// Command token → reply builder.
pub struct MenuTable {
    entries: HashMap<&'static str, MenuBuilder>,
}

impl MenuTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Top-level menu plus the four category submenus.
    pub fn university() -> Self {
        SUBMENUS.iter().fold(
            Self::empty().register(INIT_TOKEN, main_menu),
            |table, sub| table.register(sub.token, move || sub.build()),
        )
    }

    /// Adds or replaces the builder for `token`. Tokens are matched lower-case.
    pub fn register<F>(mut self, token: &'static str, build: F) -> Self
    where
        F: Fn() -> ChatResponse + Send + Sync + 'static,
    {
        self.entries.insert(token, Box::new(build));
        self
    }

    /// Reply for an already lower-cased token, if it is a command.
    pub fn respond(&self, token: &str) -> Option<ChatResponse> {
        self.entries.get(token).map(|build| build())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Registered tokens, sorted.
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<_> = self.entries.keys().copied().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl Default for MenuTable {
    fn default() -> Self {
        Self::university()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn university_table_has_expected_tokens() {
        assert_eq!(
            MenuTable::university().tokens(),
            ["academic_programs", "admissions", "campus_life", "init", "tuition"]
        );
    }

    #[test]
    fn main_menu_serializes_without_text() {
        let value = serde_json::to_value(main_menu()).unwrap();
        assert_eq!(
            value,
            json!({
                "buttons": [
                    {"label": "Academic Programs", "value": "academic_programs", "type": "category"},
                    {"label": "Admissions", "value": "admissions", "type": "category"},
                    {"label": "Tuition & Fees", "value": "tuition", "type": "category"},
                    {"label": "Campus Life & Housing", "value": "campus_life", "type": "category"},
                    {"label": "Ask a Question", "value": "ask_ai", "type": "mode_switch"}
                ]
            })
        );
    }

    #[test]
    fn tuition_submenu_payload() {
        let resp = MenuTable::university().respond("tuition").unwrap();
        let value = serde_json::to_value(resp).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Everything you need to know about costs and aid.",
                "buttons": [
                    {"label": "In-State Tuition", "value": "fees_tuition_in_state", "type": "query"},
                    {"label": "Out-of-State Tuition", "value": "fees_tuition_out_of_state", "type": "query"},
                    {"label": "Scholarships", "value": "fees_scholarships", "type": "query"},
                    {"label": "⬅ Back", "value": "init", "type": "category"}
                ]
            })
        );
    }

    #[test]
    fn every_submenu_ends_with_back() {
        let table = MenuTable::university();
        for token in ["academic_programs", "admissions", "tuition", "campus_life"] {
            let resp = table.respond(token).unwrap();
            assert!(resp.text.is_some());
            assert_eq!(resp.buttons.len(), 4);
            let back = resp.buttons.last().unwrap();
            assert_eq!((back.value.as_str(), back.kind), (INIT_TOKEN, ButtonKind::Category));
        }
    }

    #[test]
    fn unknown_tokens_are_not_commands() {
        let table = MenuTable::university();
        assert!(table.respond("fees_scholarships").is_none());
        assert!(!table.contains("Init"));
    }

    #[test]
    fn tables_are_extensible() {
        let table = MenuTable::empty().register("library", || {
            ChatResponse::with_text("Library hours", follow_up_buttons())
        });
        assert_eq!(
            table.respond("library").and_then(|r| r.text).as_deref(),
            Some("Library hours")
        );
    }
}
