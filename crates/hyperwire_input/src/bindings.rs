//! Fixed key layout
//!
//! Controls:
//! - A/D, W/S, R/E, Y/T: translate along axes 0..3
//! - Left Shift + T/Y, W/S, A/D, E/R, U/I, O/P: rotate in planes 0..5
//!   (XY, XZ, XW, YZ, YW, ZW)
//! - F/G: increase/decrease focal length

use winit::keyboard::KeyCode;

/// Two keys driving one value up and down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub increase: KeyCode,
    pub decrease: KeyCode,
}

impl KeyPair {
    pub const fn new(increase: KeyCode, decrease: KeyCode) -> Self {
        Self { increase, decrease }
    }
}

/// While held, movement keys rotate instead of translate
pub const ROTATION_MODIFIER: KeyCode = KeyCode::ShiftLeft;

/// One pair per translation axis
pub const TRANSLATION_KEYS: [KeyPair; 4] = [
    KeyPair::new(KeyCode::KeyA, KeyCode::KeyD),
    KeyPair::new(KeyCode::KeyW, KeyCode::KeyS),
    KeyPair::new(KeyCode::KeyR, KeyCode::KeyE),
    KeyPair::new(KeyCode::KeyY, KeyCode::KeyT),
];

/// One pair per rotation plane, in the order planes consume angles
pub const ROTATION_KEYS: [KeyPair; 6] = [
    KeyPair::new(KeyCode::KeyT, KeyCode::KeyY),
    KeyPair::new(KeyCode::KeyW, KeyCode::KeyS),
    KeyPair::new(KeyCode::KeyA, KeyCode::KeyD),
    KeyPair::new(KeyCode::KeyE, KeyCode::KeyR),
    KeyPair::new(KeyCode::KeyU, KeyCode::KeyI),
    KeyPair::new(KeyCode::KeyO, KeyCode::KeyP),
];

pub const FOCAL_INCREASE: KeyCode = KeyCode::KeyF;
pub const FOCAL_DECREASE: KeyCode = KeyCode::KeyG;

/// Whether `key` takes part in the layout
pub(crate) fn is_bound(key: KeyCode) -> bool {
    key == ROTATION_MODIFIER
        || key == FOCAL_INCREASE
        || key == FOCAL_DECREASE
        || TRANSLATION_KEYS
            .iter()
            .chain(ROTATION_KEYS.iter())
            .any(|pair| pair.increase == key || pair.decrease == key)
}
