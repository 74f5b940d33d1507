use std::fmt::{Display, Formatter};

/// Something with a name. Implementors supply the name parts and a nickname;
/// the full name and greeting are derived from those.
pub trait User {
    fn first_name(&self) -> &str;

    fn last_name(&self) -> &str;

    fn nickname(&self) -> &str;

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    fn say_hi(&self, name: &str) -> String {
        format!("Hello {name}. I'm {}", self.full_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    first_name: String,
    last_name: String,
    nickname: String,
    age: Option<u32>,
}

impl Player {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Player {
            first_name: first_name.into(),
            last_name: last_name.into(),
            nickname: nickname.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }
}

impl User for Player {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.nickname)?;
        if let Some(age) = self.age {
            write!(f, ", {age}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_names() {
        let player = Player::new("HyungJin", "Han", "skull");
        assert_eq!(player.full_name(), "HyungJin Han");
        assert_eq!(player.nickname(), "skull");
        assert_eq!(
            player.say_hi("hsh"),
            "Hello hsh. I'm HyungJin Han"
        );
    }

    #[test]
    fn test_display_with_age() {
        let player = Player::new("HyungJin", "Han", "skull").with_age(28);
        assert_eq!(player.age(), Some(28));
        assert_eq!(player.to_string(), "HyungJin Han (skull), 28");
    }

    #[test]
    fn test_override_default() {
        struct Anonymous;
        impl User for Anonymous {
            fn first_name(&self) -> &str {
                ""
            }
            fn last_name(&self) -> &str {
                ""
            }
            fn nickname(&self) -> &str {
                "anon"
            }
            fn full_name(&self) -> String {
                self.nickname().to_string()
            }
        }

        assert_eq!(Anonymous.say_hi("you"), "Hello you. I'm anon");
    }
}
