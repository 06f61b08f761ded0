/// Index after `index` in a list of `len` items, wrapping to the start
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Index before `index` in a list of `len` items, wrapping to the end
pub fn prev_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + len - 1) % len
}

/// Keys the open lightbox reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Overlay viewer state. The index is independent of the slider's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open { index } => Some(*index),
            Self::Closed => None,
        }
    }
}

/// Slider index plus lightbox state over one image list of `len` entries.
///
/// The two cells never write to each other: opening the lightbox copies the
/// slider index in, closing it throws the lightbox index away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    active_index: usize,
    lightbox: LightboxState,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Gallery {
    /// `len` is clamped to at least 1, matching the image list invariant.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            active_index: 0,
            lightbox: LightboxState::Closed,
        }
    }

    /// Install a new list length; both cells go back to their initial state.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; the gallery covers at least one image.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn lightbox(&self) -> LightboxState {
        self.lightbox
    }

    /// Whether prev/next controls should be offered
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        self.active_index = next_index(self.active_index, self.len);
    }

    pub fn prev(&mut self) {
        self.active_index = prev_index(self.active_index, self.len);
    }

    /// Jump to a thumbnail. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active_index = index;
        true
    }

    pub fn open_lightbox(&mut self) {
        self.lightbox = LightboxState::Open {
            index: self.active_index,
        };
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = LightboxState::Closed;
    }

    pub fn lightbox_next(&mut self) {
        if let LightboxState::Open { index } = &mut self.lightbox {
            *index = next_index(*index, self.len);
        }
    }

    pub fn lightbox_prev(&mut self) {
        if let LightboxState::Open { index } = &mut self.lightbox {
            *index = prev_index(*index, self.len);
        }
    }

    /// Jump the open lightbox to `index`. Ignored when closed or out of range.
    pub fn lightbox_select(&mut self, index: usize) -> bool {
        match &mut self.lightbox {
            LightboxState::Open { index: current } if index < self.len => {
                *current = index;
                true
            }
            _ => false,
        }
    }

    /// Apply a key press. Only an open lightbox reacts; returns whether
    /// anything changed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.lightbox.is_open() {
            return false;
        }
        let before = self.lightbox;
        match key {
            LightboxKey::Escape => self.close_lightbox(),
            LightboxKey::ArrowRight => self.lightbox_next(),
            LightboxKey::ArrowLeft => self.lightbox_prev(),
            LightboxKey::Other => {}
        }
        before != self.lightbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(prev_index(2, 3), 1);
    }

    #[test]
    fn test_next_prev_are_inverse() {
        for len in 1..6 {
            for i in 0..len {
                assert_eq!(prev_index(next_index(i, len), len), i);
                assert_eq!(next_index(prev_index(i, len), len), i);
            }
        }
    }

    #[test]
    fn test_single_image_navigation_is_noop() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);

        let mut gallery = Gallery::new(1);
        assert!(!gallery.can_navigate());
        gallery.next();
        gallery.prev();
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn test_empty_len_is_clamped() {
        let gallery = Gallery::new(0);
        assert_eq!(gallery.len(), 1);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_select_thumbnail() {
        let mut gallery = Gallery::new(4);
        assert!(gallery.select(3));
        assert_eq!(gallery.active_index(), 3);
        assert!(!gallery.select(4));
        assert_eq!(gallery.active_index(), 3);
    }

    #[test]
    fn test_open_copies_active_index() {
        let mut gallery = Gallery::new(4);
        gallery.select(2);
        gallery.open_lightbox();
        assert_eq!(gallery.lightbox(), LightboxState::Open { index: 2 });
    }

    #[test]
    fn test_open_then_close_keeps_active_index() {
        let mut gallery = Gallery::new(3);
        gallery.next();
        gallery.open_lightbox();
        gallery.close_lightbox();
        assert_eq!(gallery.active_index(), 1);
        assert!(!gallery.lightbox().is_open());
    }

    #[test]
    fn test_lightbox_navigation_does_not_write_back() {
        let mut gallery = Gallery::new(4);
        gallery.open_lightbox();
        assert!(gallery.handle_key(LightboxKey::ArrowRight));
        assert!(gallery.handle_key(LightboxKey::ArrowRight));
        assert_eq!(gallery.lightbox().index(), Some(2));
        assert_eq!(gallery.active_index(), 0);

        assert!(gallery.handle_key(LightboxKey::Escape));
        assert_eq!(gallery.lightbox(), LightboxState::Closed);
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn test_lightbox_arrow_left_wraps() {
        let mut gallery = Gallery::new(3);
        gallery.open_lightbox();
        gallery.handle_key(LightboxKey::ArrowLeft);
        assert_eq!(gallery.lightbox().index(), Some(2));
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut gallery = Gallery::new(3);
        assert!(!gallery.handle_key(LightboxKey::ArrowRight));
        assert!(!gallery.handle_key(LightboxKey::Escape));
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn test_other_key_changes_nothing() {
        let mut gallery = Gallery::new(3);
        gallery.open_lightbox();
        assert!(!gallery.handle_key(LightboxKey::Other));
        assert_eq!(gallery.lightbox().index(), Some(0));
    }

    #[test]
    fn test_lightbox_select() {
        let mut gallery = Gallery::new(3);
        assert!(!gallery.lightbox_select(1));
        gallery.open_lightbox();
        assert!(gallery.lightbox_select(2));
        assert!(!gallery.lightbox_select(3));
        assert_eq!(gallery.lightbox().index(), Some(2));
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut gallery = Gallery::new(3);
        gallery.select(2);
        gallery.open_lightbox();
        gallery.reset(5);
        assert_eq!(gallery, Gallery::new(5));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(LightboxKey::from_key_name("Escape"), LightboxKey::Escape);
        assert_eq!(LightboxKey::from_key_name("ArrowLeft"), LightboxKey::ArrowLeft);
        assert_eq!(LightboxKey::from_key_name("ArrowRight"), LightboxKey::ArrowRight);
        assert_eq!(LightboxKey::from_key_name("Enter"), LightboxKey::Other);
    }
}
