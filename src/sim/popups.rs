//! Floating "+points" markers that rise from kill sites and fade out

use glam::Vec2;

#[derive(Debug, Clone)]
pub struct ScorePopup {
    pub pos: Vec2,
    pub points: u64,
    pub age: f32,
}

/// Owns every live popup
#[derive(Debug, Clone)]
pub struct ScorePopups {
    duration: f32,
    rise_speed: f32,
    popups: Vec<ScorePopup>,
}

impl ScorePopups {
    pub fn new(duration: f32, rise_speed: f32) -> Self {
        Self {
            duration,
            rise_speed,
            popups: Vec::new(),
        }
    }

    pub fn spawn(&mut self, pos: Vec2, points: u64) {
        self.popups.push(ScorePopup {
            pos,
            points,
            age: 0.0,
        });
    }

    pub fn update(&mut self, dt: f32) {
        for popup in &mut self.popups {
            popup.pos.y += self.rise_speed * dt;
            popup.age += dt;
        }
        let duration = self.duration;
        self.popups.retain(|p| p.age < duration);
    }

    /// Alpha fading from 255 to 0 over the popup's life
    pub fn alpha(&self, popup: &ScorePopup) -> u8 {
        if self.duration <= 0.0 {
            return 0;
        }
        let t = (popup.age / self.duration).min(1.0);
        (255.0 * (1.0 - t)) as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScorePopup> {
        self.popups.iter()
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }
}
