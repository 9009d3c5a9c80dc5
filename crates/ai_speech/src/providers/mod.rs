//! Concrete text-to-speech providers

pub mod fish_speech;
