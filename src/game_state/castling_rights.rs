use crate::game_state::chess_types::Color;

pub const CASTLE_LIGHT_KINGSIDE: u8 = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: u8 = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: u8 = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: u8 = 1 << 3;

/// Four castling permissions packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const ALL: Self = Self(
        CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    );
    pub const NONE: Self = Self(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn kingside_flag(color: Color) -> u8 {
        match color {
            Color::Light => CASTLE_LIGHT_KINGSIDE,
            Color::Dark => CASTLE_DARK_KINGSIDE,
        }
    }

    #[inline]
    pub const fn queenside_flag(color: Color) -> u8 {
        match color {
            Color::Light => CASTLE_LIGHT_QUEENSIDE,
            Color::Dark => CASTLE_DARK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        self.0 & Self::kingside_flag(color) != 0
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        self.0 & Self::queenside_flag(color) != 0
    }

    #[inline]
    pub const fn without(self, flags: u8) -> Self {
        Self(self.0 & !flags)
    }

    /// Rights with both permissions of `color` removed.
    #[inline]
    pub const fn without_color(self, color: Color) -> Self {
        self.without(Self::kingside_flag(color) | Self::queenside_flag(color))
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoking_one_color_keeps_the_other() {
        let rights = CastlingRights::ALL.without_color(Color::Light);
        assert!(!rights.kingside(Color::Light));
        assert!(!rights.queenside(Color::Light));
        assert!(rights.kingside(Color::Dark));
        assert!(rights.queenside(Color::Dark));
    }

    #[test]
    fn from_bits_ignores_unknown_flags() {
        assert_eq!(CastlingRights::from_bits(0xff), CastlingRights::ALL);
    }
}
