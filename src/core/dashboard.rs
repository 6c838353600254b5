use std::collections::HashSet;
use crate::models::{Interest, Message, Profile};

/// Profiles that sent an interest to `profile_id`, in collection order
pub fn received_interests<'a>(
    profiles: &'a [Profile],
    interests: &[Interest],
    profile_id: &str,
) -> Vec<&'a Profile> {
    let senders: HashSet<&str> = interests
        .iter()
        .filter(|i| i.receiver_id == profile_id)
        .map(|i| i.sender_id.as_str())
        .collect();

    profiles
        .iter()
        .filter(|p| senders.contains(p.id.as_str()))
        .collect()
}

/// First message of each conversation `profile_id` takes part in
///
/// Returns at most `limit` entries as `(partner_id, message)` pairs.
pub fn recent_conversations<'a>(
    messages: &'a [Message],
    profile_id: &str,
    limit: usize,
) -> Vec<(&'a str, &'a Message)> {
    let mut partners = HashSet::new();

    messages
        .iter()
        .filter_map(|m| m.partner_of(profile_id).map(|partner| (partner, m)))
        .filter(|(partner, _)| partners.insert(*partner))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, InterestStatus};

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            user_id: format!("user{}", id),
            name: format!("User {}", id),
            age: 30,
            gender: Gender::Female,
            location: "Boston, USA".to_string(),
            bio: String::new(),
            occupation: "Physician".to_string(),
            education: "MD".to_string(),
            religion: None,
            height: None,
            photos: vec![],
            interests: vec![],
            is_verified: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn interest(sender: &str, receiver: &str) -> Interest {
        Interest {
            id: format!("{}-{}", sender, receiver),
            sender_id: sender.to_string(),
            receiver_id: receiver.to_string(),
            status: InterestStatus::Pending,
            created_at: None,
        }
    }

    fn message(id: &str, sender: &str, receiver: &str) -> Message {
        Message {
            id: id.to_string(),
            sender_id: sender.to_string(),
            receiver_id: receiver.to_string(),
            content: format!("message {}", id),
            read: false,
            created_at: None,
        }
    }

    #[test]
    fn test_received_interests_in_collection_order() {
        let profiles = vec![profile("1"), profile("2"), profile("3"), profile("4")];
        let interests = vec![interest("4", "2"), interest("1", "2"), interest("3", "1")];

        let received: Vec<&str> = received_interests(&profiles, &interests, "2")
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(received, vec!["1", "4"]);
    }

    #[test]
    fn test_unknown_sender_skipped() {
        let profiles = vec![profile("1")];
        let interests = vec![interest("99", "1")];

        assert!(received_interests(&profiles, &interests, "1").is_empty());
    }

    #[test]
    fn test_one_entry_per_partner() {
        let messages = vec![
            message("a", "2", "3"),
            message("b", "3", "2"),
            message("c", "2", "4"),
            message("d", "5", "6"),
        ];

        let conversations = recent_conversations(&messages, "2", 3);
        let summary: Vec<(&str, &str)> = conversations
            .iter()
            .map(|(partner, m)| (*partner, m.id.as_str()))
            .collect();

        assert_eq!(summary, vec![("3", "a"), ("4", "c")]);
    }

    #[test]
    fn test_conversation_limit() {
        let messages: Vec<Message> = (0..5)
            .map(|i| message(&i.to_string(), "1", &format!("p{}", i)))
            .collect();

        assert_eq!(recent_conversations(&messages, "1", 3).len(), 3);
    }
}
