//! Player-facing feedback: chat messages, sounds and particles.
//!
//! The engine never talks to a renderer or audio system. It emits events into a
//! [`FeedbackSink`] and forgets about them.

use serde::{Deserialize, Serialize};
use stash_core::{DimensionId, Vec3};

/// Receiver for fire-and-forget feedback events.
pub trait FeedbackSink {
    /// Chat message addressed to the acting player.
    fn message(&mut self, message: ChatMessage);

    /// Sound played to the acting player.
    fn sound(&mut self, sound: Sound);

    /// Particle spawned into a dimension.
    fn particle(&mut self, particle: Particle);
}

/// One segment of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPart {
    /// Literal text, may contain `§` formatting codes.
    Text(String),
    /// Translation key resolved by the client.
    Translate(String),
}

/// Chat message made of raw text and translation segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Segments in display order.
    pub rawtext: Vec<TextPart>,
}

impl ChatMessage {
    /// Empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single literal segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    /// Append a literal segment.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.rawtext.push(TextPart::Text(text.into()));
        self
    }

    /// Append a translation segment.
    #[must_use]
    pub fn translate(mut self, key: impl Into<String>) -> Self {
        self.rawtext.push(TextPart::Translate(key.into()));
        self
    }

    /// Render without formatting codes; translation keys are shown verbatim.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for part in &self.rawtext {
            let segment = match part {
                TextPart::Text(text) => text,
                TextPart::Translate(key) => key,
            };
            let mut chars = segment.chars();
            while let Some(ch) = chars.next() {
                if ch == '§' {
                    chars.next();
                } else {
                    out.push(ch);
                }
            }
        }
        out
    }
}

/// Sounds the engine and its triggers play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundId {
    /// Items moved by a range transfer.
    #[serde(rename = "random.pop2")]
    Transfer,
    /// A range transfer that moved nothing.
    #[serde(rename = "block.click")]
    NoTransfer,
    /// Stack inserted into a single-slot container.
    #[serde(rename = "block.decorated_pot.insert")]
    Insert,
    /// Stack rejected because the container is full.
    #[serde(rename = "block.decorated_pot.insert_fail")]
    InsertFail,
    /// Stack retrieved from a single-slot container.
    #[serde(rename = "bundle.remove_one")]
    Remove,
}

impl SoundId {
    /// Host sound identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            SoundId::Transfer => "random.pop2",
            SoundId::NoTransfer => "block.click",
            SoundId::Insert => "block.decorated_pot.insert",
            SoundId::InsertFail => "block.decorated_pot.insert_fail",
            SoundId::Remove => "bundle.remove_one",
        }
    }
}

/// A sound request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
    /// Which sound.
    pub id: SoundId,
    /// Where to play it; `None` plays at the player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec3>,
    /// Pitch multiplier; `None` keeps the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f32>,
}

impl Sound {
    /// Sound played at the player.
    pub fn new(id: SoundId) -> Self {
        Self {
            id,
            location: None,
            pitch: None,
        }
    }

    /// Play at a world location.
    #[must_use]
    pub fn at(mut self, location: Vec3) -> Self {
        self.location = Some(location);
        self
    }

    /// Override the pitch.
    #[must_use]
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = Some(pitch);
        self
    }
}

/// Particle effects used for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Range outline.
    #[serde(rename = "minecraft:endrod")]
    EndRod,
    /// Container marker.
    #[serde(rename = "minecraft:blue_flame_particle")]
    BlueFlame,
}

impl ParticleKind {
    /// Host particle identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParticleKind::EndRod => "minecraft:endrod",
            ParticleKind::BlueFlame => "minecraft:blue_flame_particle",
        }
    }
}

/// A particle spawn request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Effect type.
    pub kind: ParticleKind,
    /// Target dimension.
    pub dimension: DimensionId,
    /// Spawn location.
    pub location: Vec3,
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn message(&mut self, _message: ChatMessage) {}

    fn sound(&mut self, _sound: Sound) {}

    fn particle(&mut self, _particle: Particle) {}
}

/// A recorded feedback event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackEvent {
    /// Chat message.
    Message(ChatMessage),
    /// Sound.
    Sound(Sound),
    /// Particle.
    Particle(Particle),
}

/// Sink that keeps every event in order, for tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    events: Vec<FeedbackEvent>,
}

impl RecordingFeedback {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in emission order.
    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Messages rendered with [`ChatMessage::to_plain`].
    pub fn plain_messages(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                FeedbackEvent::Message(message) => Some(message.to_plain()),
                _ => None,
            })
            .collect()
    }

    /// Sound ids in emission order.
    pub fn sounds(&self) -> Vec<SoundId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                FeedbackEvent::Sound(sound) => Some(sound.id),
                _ => None,
            })
            .collect()
    }

    /// Number of particles of `kind`.
    pub fn particle_count(&self, kind: ParticleKind) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, FeedbackEvent::Particle(p) if p.kind == kind))
            .count()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn message(&mut self, message: ChatMessage) {
        self.events.push(FeedbackEvent::Message(message));
    }

    fn sound(&mut self, sound: Sound) {
        self.events.push(FeedbackEvent::Sound(sound));
    }

    fn particle(&mut self, particle: Particle) {
        self.events.push(FeedbackEvent::Particle(particle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rendering_strips_format_codes() {
        let message = ChatMessage::new()
            .text("§c-40x§r ")
            .translate("item.iron_ingot.name");
        assert_eq!(message.to_plain(), "-40x item.iron_ingot.name");
    }

    #[test]
    fn events_serialize_with_host_ids() {
        let event = FeedbackEvent::Sound(Sound::new(SoundId::Transfer));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"sound","id":"random.pop2"}"#);

        let message = FeedbackEvent::Message(ChatMessage::plain("hi").translate("k"));
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"message","rawtext":[{"text":"hi"},{"translate":"k"}]}"#
        );
    }

    #[test]
    fn recorder_keeps_order() {
        let mut sink = RecordingFeedback::new();
        sink.sound(Sound::new(SoundId::NoTransfer));
        sink.message(ChatMessage::plain("a"));
        sink.particle(Particle {
            kind: ParticleKind::EndRod,
            dimension: DimensionId::Overworld,
            location: Vec3::new(0.0, 0.0, 0.0),
        });
        assert_eq!(sink.events().len(), 3);
        assert_eq!(sink.sounds(), vec![SoundId::NoTransfer]);
        assert_eq!(sink.plain_messages(), vec!["a".to_string()]);
        assert_eq!(sink.particle_count(ParticleKind::EndRod), 1);
        assert_eq!(sink.drain().len(), 3);
        assert!(sink.events().is_empty());
    }
}
