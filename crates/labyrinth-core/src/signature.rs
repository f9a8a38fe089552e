//! Digit signatures of rooms and the storyboard cues derived from them.
//!
//! Every room id carries a small fingerprint computed from its digits. The
//! fingerprint picks a scale, a mood, a lighting setup and a camera style, so
//! two visits to the same room always read the same way.

use crate::room::RoomId;

const MOODS: [&str; 9] = [
    "calm but uneasy",
    "nostalgic",
    "hopeful",
    "paranoid",
    "urgent",
    "resentful",
    "resigned",
    "electric, on edge",
    "quietly dangerous",
];

const FALLBACK_LIGHTING: &str = "mixed neon reflections in warm and cold tones";

/// Numeric fingerprint of a room id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSignature {
    /// The room the signature was computed for.
    pub id: RoomId,
    /// Sum of all digits.
    pub total: u32,
    /// Largest digit minus smallest digit.
    pub spread: u32,
    /// `total % 9`.
    pub mod9: u32,
    /// Sum of distances between neighbouring digits (wrapping around), mod 10.
    pub apex: u32,
    /// One character per digit: `1` for odd, `0` for even.
    pub parity_code: String,
}

impl RoomSignature {
    /// Compute the signature of `id`.
    pub fn of(id: &RoomId) -> Self {
        let digits = id.digits();
        let total: u32 = digits.iter().sum();
        let max = digits.iter().copied().max().unwrap_or(0);
        let min = digits.iter().copied().min().unwrap_or(0);
        let apex = digits
            .iter()
            .zip(digits.iter().cycle().skip(1))
            .map(|(a, b)| a.abs_diff(*b))
            .sum::<u32>()
            % 10;
        let parity_code = digits
            .iter()
            .map(|d| if d % 2 == 1 { '1' } else { '0' })
            .collect();

        Self {
            id: id.clone(),
            total,
            spread: max - min,
            mod9: total % 9,
            apex,
            parity_code,
        }
    }

    /// The storyboard cues this signature maps to.
    pub fn storyboard(&self) -> Storyboard {
        let room_scale = match self.spread {
            0..=4 => "small, intimate booth",
            5..=10 => "medium-sized room",
            _ => "wide, echoing space",
        };

        let lighting = match self.parity_code.as_str() {
            "000" => "soft even lighting, no harsh contrast",
            "111" => "hard contrast, deep shadows",
            "001" => "warm foreground, cool background",
            "010" => "cool overhead light with warm side spill",
            "100" => "single warm key light with murky surroundings",
            _ => FALLBACK_LIGHTING,
        };

        let camera = match self.apex {
            0..=2 => "static medium shot",
            3..=5 => "slow creeping zoom",
            _ => "handheld close-up with slight shake",
        };

        Storyboard {
            room_scale,
            mood: MOODS[self.mod9 as usize],
            lighting,
            camera,
        }
    }
}

/// Scene cues for describing a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Storyboard {
    /// How large the room feels.
    pub room_scale: &'static str,
    /// The emotional tone.
    pub mood: &'static str,
    /// Light setup.
    pub lighting: &'static str,
    /// Camera style.
    pub camera: &'static str,
}
