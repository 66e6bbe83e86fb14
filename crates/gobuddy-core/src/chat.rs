//! Scripted chat - the canned partner conversation behind "Connect".
//!
//! The script itself is pure state: it says which reply is owed and how
//! long the partner should appear to type. Whoever drives it (the socket
//! layer) owns the actual timers and must cancel a pending reply when
//! the visitor sends again or leaves.

use std::time::Duration;

/// The message the visitor's client opens every thread with.
pub const OPENER: &str = "Hey! I saw your post about sports.";
const FIRST_REPLY: &str = "Hi! Yes, I'm still looking for a partner. Are you interested?";
const LATER_REPLY: &str = "Sounds great! Let's connect at the venue.";

/// Typing delay before the greeting reply.
pub const FIRST_REPLY_DELAY: Duration = Duration::from_millis(2000);
/// Typing delay before every later reply.
pub const LATER_REPLY_DELAY: Duration = Duration::from_millis(2500);

/// Where a conversation stands: `Waiting` means a reply is owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    Waiting,
    Resolved,
}

/// A reply the partner owes, with the typing delay to fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedReply {
    pub text: String,
    pub delay: Duration,
}

/// Per-conversation script state.
#[derive(Debug, Default)]
pub struct ChatScript {
    phase: ChatPhase,
    exchanges: u32,
}

impl ChatScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    /// Number of visitor messages answered so far (the opener excluded).
    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    /// The thread just opened with [`OPENER`] on screen; the partner owes
    /// the greeting.
    pub fn open(&mut self) -> ScriptedReply {
        self.phase = ChatPhase::Waiting;
        ScriptedReply {
            text: FIRST_REPLY.to_string(),
            delay: FIRST_REPLY_DELAY,
        }
    }

    /// The visitor sent a message; the partner owes the stock answer.
    /// Any previously owed reply is superseded.
    pub fn reply_to(&mut self, _text: &str) -> ScriptedReply {
        self.exchanges += 1;
        self.phase = ChatPhase::Waiting;
        ScriptedReply {
            text: LATER_REPLY.to_string(),
            delay: LATER_REPLY_DELAY,
        }
    }

    /// The owed reply was delivered.
    pub fn delivered(&mut self) {
        self.phase = ChatPhase::Resolved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_owes_the_greeting() {
        let mut script = ChatScript::new();
        assert_eq!(script.phase(), ChatPhase::Idle);

        let reply = script.open();
        assert_eq!(reply.text, FIRST_REPLY);
        assert_eq!(reply.delay, FIRST_REPLY_DELAY);
        assert_eq!(script.phase(), ChatPhase::Waiting);
    }

    #[test]
    fn every_visitor_message_gets_the_stock_answer() {
        let mut script = ChatScript::new();
        script.open();
        script.delivered();

        let first = script.reply_to("are you free at 6?");
        assert_eq!(first.text, LATER_REPLY);
        assert_eq!(first.delay, LATER_REPLY_DELAY);

        script.delivered();
        let second = script.reply_to("great, see you!");
        assert_eq!(second.text, LATER_REPLY);
        assert_eq!(script.exchanges(), 2);
    }

    #[test]
    fn sending_again_while_waiting_supersedes_the_owed_reply() {
        let mut script = ChatScript::new();
        script.open();

        // no delivery in between: the caller is expected to cancel the
        // first timer and run only this one
        let reply = script.reply_to("hello?");
        assert_eq!(script.phase(), ChatPhase::Waiting);
        assert_eq!(reply.text, LATER_REPLY);

        script.delivered();
        assert_eq!(script.phase(), ChatPhase::Resolved);
    }
}
