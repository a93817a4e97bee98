use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::typing::{Timing, WordList};

/// A project card on the details page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Project {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

/// A static link on the contact page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Channel name, e.g. "Email"
    pub label: String,
    /// What is shown for the link
    pub text: String,
    pub url: String,
}

impl ContactLink {
    pub fn new(label: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        ContactLink {
            label: label.into(),
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Everything the portfolio displays.
///
/// Fields missing from a profile file are taken from [`Profile::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub handle: String,
    /// Phrases completing "I'm ..." on the landing page
    pub phrases: Vec<String>,
    pub bio: Vec<String>,
    pub projects: Vec<Project>,
    pub contact_intro: String,
    pub contacts: Vec<ContactLink>,
    pub timing: Timing,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            handle: String::from("notymn"),
            phrases: vec![
                String::from("a Front-End Developer"),
                String::from("a Back-End Developer"),
                String::from("a Gym Rat"),
                String::from("a Crypto Trader"),
                String::from("a Professional Boxer"),
            ],
            bio: vec![
                String::from(
                    "notymn, also known as Yamen Afifi, is a 18 year old professional boxer & well educated gentleman.",
                ),
                String::from(
                    "Driven by curiosity and a desire to push boundaries, notymn constantly seeks new challenges in both the digital and physical realms.",
                ),
            ],
            projects: vec![
                Project::new(
                    "Saudi Arabia Booking",
                    "An innovative application that introduces new intuitive booking solutions for appointment/reservation based shops in the Kingdom of Saudi Arabia.",
                    "https://example.com/saudi-arabia-booking",
                ),
                Project::new(
                    "The United Network",
                    "Private chat-application that offers End to End encryption & media posting.",
                    "https://example.com/united-network",
                ),
                Project::new(
                    "Essences",
                    "An e-commerce shop that sells simplistic yet eye pleasing wardrobe pieces.",
                    "https://example.com/essences",
                ),
            ],
            contact_intro: String::from(
                "I'm always open to new opportunities and collaborations. Feel free to reach out!",
            ),
            contacts: vec![
                ContactLink::new("Email", "notymn@gmail.com", "mailto:notymn@gmail.com"),
                ContactLink::new("Instagram", "@notymn", "https://instagram.com/notymn_"),
                ContactLink::new("Twitter", "@notymn", "https://x.com/notvoiez"),
            ],
            timing: Timing::default(),
        }
    }
}

impl Profile {
    /// Phrases as a validated word list
    pub fn word_list(&self) -> Result<WordList> {
        WordList::new(self.phrases.iter().cloned())
    }

    /// Fail fast on content the UI cannot render
    pub fn validate(&self) -> Result<()> {
        self.word_list().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = Profile::default();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.word_list().unwrap().len(), 5);
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.contacts.len(), 3);
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let profile = Profile {
            phrases: Vec::new(),
            ..Profile::default()
        };
        assert!(matches!(profile.validate(), Err(Error::EmptyWordList)));
    }
}
