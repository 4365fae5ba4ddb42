use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// One keyword rule: fires when any trigger occurs anywhere in the
/// lowercased input. No tokenization, plain substring containment.
struct Rule {
    topic: &'static str,
    triggers: &'static [&'static str],
    replies: &'static [&'static str],
}

impl Rule {
    fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }
}

// Order is significant: the first matching rule wins. `mess` never reaches
// the food rule and `hall` never reaches the rooms rule; both are claimed
// by earlier rules.
static RULES: &[Rule] = &[
    Rule {
        topic: "bill splitting",
        triggers: &["electricity", "bill", "split", "mess"],
        replies: &[
            "To manage electricity in a mess, track monthly bills (typically 1,000-2,000 BDT, split among roommates). Use energy-efficient bulbs and turn off appliances when not in use. Pay bills on time to avoid disconnections, and report outages to the landlord. Use apps like bKash for shared payments.",
        ],
    },
    Rule {
        topic: "hall furniture",
        triggers: &["sust", "hall", "furniture", "provided"],
        replies: &[
            "SUST halls typically provide a bed, table, chair, and locker per student. You need to buy additional items like fans or personal furniture.",
        ],
    },
    Rule {
        topic: "hostel shopping",
        triggers: &["hostel", "buy", "need"],
        replies: &[
            "In hostels, residents must purchase their own furniture, like beds, chairs or desks, as none is provided. Check with the hostel manager for guidelines.",
        ],
    },
    Rule {
        topic: "greeting",
        triggers: &["hello", "hi", "hey"],
        replies: &[
            "Hello! I'm your University Accommodation Assistant. How can I help you with halls, mess, or hostel questions?",
            "Hi there! I'm here to help with accommodation queries. What would you like to know?",
            "Hey! I can assist with university accommodation questions. What's on your mind?",
            "Hello! I'm excited to help you with accommodation matters. What can I do for you?",
        ],
    },
    Rule {
        topic: "mess facilities",
        triggers: &["mess", "food", "meal"],
        replies: &[
            "Mess facilities typically provide breakfast, lunch, and dinner. Meal times are usually fixed, and you may need to register for mess services. Check with your hall administration for specific timings and menu options.",
            "Most university messes offer vegetarian and non-vegetarian options. You can usually choose your meal plan at the beginning of the semester. Contact the mess manager for detailed information.",
        ],
    },
    Rule {
        topic: "rooms",
        triggers: &["hall", "room", "accommodation"],
        replies: &[
            "University halls typically provide basic furniture and shared facilities like bathrooms and common areas. You'll need to bring personal items like bedding, study materials, and any additional furniture you prefer.",
            "Hall rooms are usually shared between 2-4 students. Each student gets a bed, study table, chair, and storage space. Common facilities include dining halls, study rooms, and recreational areas.",
        ],
    },
    Rule {
        topic: "help",
        triggers: &["help", "assistance", "support"],
        replies: &[
            "I'd be happy to help with accommodation questions! What specific aspect of university housing would you like to know about?",
            "Accommodation assistance is my specialty! Feel free to ask about halls, mess, hostel facilities, or any housing-related concerns.",
            "I love helping with accommodation matters! Whether it's furniture, bills, facilities, or policies, I'm here to assist. What's your question?",
            "Accommodation help coming up! What specific housing challenge are you facing today?",
        ],
    },
    Rule {
        topic: "explanations",
        triggers: &["explain", "what is", "how does", "policy", "rule"],
        replies: &[
            "I'd be delighted to explain accommodation policies! Could you provide a bit more detail about what specific rule or policy you'd like me to break down?",
            "Absolutely! I love explaining accommodation concepts. What would you like me to clarify or explain in detail?",
            "I'm here to help with accommodation explanations! The more specific your question, the better I can assist you.",
            "Great question! I'd be happy to provide a clear explanation about accommodation matters. What topic would you like me to cover?",
        ],
    },
    Rule {
        topic: "thanks",
        triggers: &["thank", "thanks"],
        replies: &[
            "You're very welcome! I'm glad I could help. Is there anything else you'd like to know?",
            "My pleasure! Happy to assist anytime. What else can I help you with?",
            "You're welcome! I'm here whenever you need assistance. Feel free to ask more questions!",
            "No problem at all! I enjoy helping. What's your next question?",
        ],
    },
    Rule {
        topic: "farewell",
        triggers: &["bye", "goodbye", "see you"],
        replies: &[
            "Goodbye! It was great chatting with you. Feel free to come back anytime!",
            "See you later! Thanks for the conversation. I'll be here when you need me!",
            "Take care! It was wonderful talking with you. Come back soon!",
            "Farewell! I enjoyed our chat. Don't hesitate to return if you have more questions!",
        ],
    },
];

static DEFAULT_REPLIES: &[&str] = &[
    "That's an interesting accommodation question! I'd be happy to help you explore that topic further. Could you provide a bit more detail?",
    "I understand what you're asking about regarding accommodation. Let me think about the best way to help you with that.",
    "Great question about university housing! I'm processing your request and will do my best to provide a helpful response.",
    "I'm here to help with accommodation matters! Could you elaborate a bit more on what you'd like to know?",
    "That's a thoughtful accommodation question. I'd love to assist you with that. What specific aspect would you like me to focus on?",
    "I appreciate your accommodation question! Let me provide you with some helpful information on that topic.",
    "Interesting point about housing! I can definitely help you with that. What would you like to know more about?",
    "I'm excited to help you with accommodation matters! Could you give me a bit more context so I can provide the best assistance?",
];

/// Keyword responder: first matching rule wins, reply picked uniformly at
/// random from that rule's candidates. Unmatched input draws from a fixed
/// default list, so there is always a reply.
#[derive(Clone)]
pub struct Responder {
    rules: &'static [Rule],
    fallback: &'static [&'static str],
}

impl Responder {
    pub fn new() -> Self {
        Responder {
            rules: RULES,
            fallback: DEFAULT_REPLIES,
        }
    }

    pub fn respond(&self, input: &str) -> &'static str {
        self.respond_with(&mut rand::thread_rng(), input)
    }

    pub fn respond_with(&self, rng: &mut impl Rng, input: &str) -> &'static str {
        *self.candidates(input).choose(rng).unwrap()
    }

    /// The full candidate set a given input draws from.
    pub fn candidates(&self, input: &str) -> &'static [&'static str] {
        let normalized = input.to_lowercase();
        match self.rules.iter().find(|r| r.matches(&normalized)) {
            Some(rule) => {
                debug!("Input matched `{}` rule", rule.topic);
                rule.replies
            }
            None => {
                debug!("No rule matched, using default replies");
                self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn every_rule_has_replies() {
        for rule in RULES {
            assert!(!rule.replies.is_empty(), "`{}` has no replies", rule.topic);
            assert!(!rule.triggers.is_empty(), "`{}` has no triggers", rule.topic);
        }
        assert_eq!(DEFAULT_REPLIES.len(), 8);
    }

    #[test]
    fn billing_inputs_use_the_bill_splitting_reply() {
        let responder = Responder::new();
        for input in [
            "how do we handle electricity?",
            "the BILL arrived",
            "can we split it",
            "our mess is chaotic",
        ] {
            let candidates = responder.candidates(input);
            assert_eq!(candidates.len(), 1, "input: {input}");
            assert!(candidates[0].starts_with("To manage electricity"));
        }
    }

    #[test]
    fn greeting_has_four_variants() {
        let responder = Responder::new();
        let candidates = responder.candidates("good day, hello!");
        assert_eq!(candidates.len(), 4);
        for _ in 0..32 {
            let reply = responder.respond("good day, hello!");
            assert!(candidates.contains(&reply));
        }
    }

    #[test]
    fn unmatched_input_uses_default_replies() {
        let responder = Responder::new();
        let candidates = responder.candidates("what time does the library open");
        assert_eq!(candidates.len(), 8);
        assert!(std::ptr::eq(candidates, DEFAULT_REPLIES));
    }

    #[test]
    fn bill_splitting_wins_over_greeting() {
        // First match decides: "mess" is checked before "hello".
        let responder = Responder::new();
        let candidates = responder.candidates("hello mess");
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].starts_with("To manage electricity"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let responder = Responder::new();
        assert_eq!(
            responder.candidates("HELLO THERE"),
            responder.candidates("hello there")
        );
    }

    #[test]
    fn triggers_match_inside_words() {
        // "this" contains "hi", so it greets.
        let responder = Responder::new();
        let candidates = responder.candidates("this");
        assert_eq!(candidates.len(), 4);
        assert!(candidates[0].contains("University Accommodation Assistant"));
    }

    #[test]
    fn food_reaches_the_mess_rule_but_mess_does_not() {
        let responder = Responder::new();
        let food = responder.candidates("is the food any good");
        assert_eq!(food.len(), 2);
        assert!(food[0].starts_with("Mess facilities"));

        let mess = responder.candidates("mess");
        assert_eq!(mess.len(), 1);
        assert!(mess[0].starts_with("To manage electricity"));
    }

    #[test]
    fn hall_questions_without_earlier_triggers_use_the_rooms_rule() {
        let responder = Responder::new();
        let candidates = responder.candidates("tell me about room sharing");
        assert_eq!(candidates.len(), 2);
        assert!(candidates[1].starts_with("Hall rooms are usually shared"));
    }

    #[test]
    fn respond_with_is_deterministic_per_seed() {
        let responder = Responder::new();
        let first = responder.respond_with(&mut StdRng::seed_from_u64(7), "thanks a lot");
        let second = responder.respond_with(&mut StdRng::seed_from_u64(7), "thanks a lot");
        assert_eq!(first, second);
        assert!(responder.candidates("thanks a lot").contains(&first));
    }
}
