//! Ticket layout — slot positions lifted from the printed ticket design.
//!
//! The design space is a 900×300 card. Every slot is anchored to the right
//! edge, matching the printed template the desk overlays:
//!
//! | Slot          | Anchor      | Right inset | Size px | Color |
//! |---------------|-------------|-------------|---------|-------|
//! | ticket        | top 6       | 80          | 18      | red   |
//! | first name    | bottom 218  | 100         | 14      | black |
//! | last name     | bottom 160  | 80          | 14      | black |
//! | address       | bottom 104  | 16          | 14      | black |
//! | identity code | bottom 104  | 64          | 14      | black |
//! | phone         | bottom 46   | 88          | 14      | black |
//!
//! Output renders at 2× for print sharpness, so all maths here work in the
//! scaled 1800×600 pixel space.

use tombola_core::{DeskConfig, FieldKey, Registrant};

/// Design-space card size.
pub const CANVAS_WIDTH: u32 = 900;
/// Design-space card size.
pub const CANVAS_HEIGHT: u32 = 300;
/// Output is rendered at twice the design size.
pub const SCALE: u32 = 2;

pub const TICKET_RED: [u8; 3] = [239, 68, 68];
pub const TEXT_BLACK: [u8; 3] = [17, 24, 39];

/// Vertical anchoring of a slot, in design-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAnchor {
    /// Distance from the top edge to the slot's top.
    Top(u32),
    /// Distance from the bottom edge to the slot's bottom.
    Bottom(u32),
}

/// One piece of text on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSlot {
    pub field: FieldKey,
    /// Distance from the right edge to the slot's right, design-space.
    pub right: u32,
    pub anchor: VAnchor,
    /// Font size in design-space pixels.
    pub size: u32,
    pub color: [u8; 3],
}

/// The slots drawn for this desk configuration, top to bottom.
pub fn slots(config: &DeskConfig) -> Vec<TextSlot> {
    let mut slots = vec![
        TextSlot {
            field: FieldKey::Ticket,
            right: 80,
            anchor: VAnchor::Top(6),
            size: 18,
            color: TICKET_RED,
        },
        TextSlot {
            field: FieldKey::FirstName,
            right: 100,
            anchor: VAnchor::Bottom(218),
            size: 14,
            color: TEXT_BLACK,
        },
        TextSlot {
            field: FieldKey::LastName,
            right: 80,
            anchor: VAnchor::Bottom(160),
            size: 14,
            color: TEXT_BLACK,
        },
    ];
    if config.collect_address {
        slots.push(TextSlot {
            field: FieldKey::Address,
            right: 16,
            anchor: VAnchor::Bottom(104),
            size: 14,
            color: TEXT_BLACK,
        });
    }
    if config.identity_code_digits.is_some() {
        slots.push(TextSlot {
            field: FieldKey::IdentityCode,
            right: 64,
            anchor: VAnchor::Bottom(104),
            size: 14,
            color: TEXT_BLACK,
        });
    }
    slots.push(TextSlot {
        field: FieldKey::Phone,
        right: 88,
        anchor: VAnchor::Bottom(46),
        size: 14,
        color: TEXT_BLACK,
    });
    slots
}

/// Scale a design-space length to output pixels.
pub fn scaled(design: u32) -> u32 {
    design * SCALE
}

/// Output-space x of the text's top-left corner, given its measured width.
///
/// Slots are right-aligned; text wider than the card pins to the left edge
/// instead of going negative.
pub fn top_left_x(slot: &TextSlot, text_width: u32) -> u32 {
    let right_edge = scaled(CANVAS_WIDTH).saturating_sub(scaled(slot.right));
    right_edge.saturating_sub(text_width)
}

/// Output-space y of the text's top-left corner, given its measured height.
pub fn top_left_y(slot: &TextSlot, text_height: u32) -> u32 {
    match slot.anchor {
        VAnchor::Top(top) => scaled(top),
        VAnchor::Bottom(bottom) => scaled(CANVAS_HEIGHT)
            .saturating_sub(scaled(bottom))
            .saturating_sub(text_height),
    }
}

/// The entry value a slot displays.
pub fn slot_value(entry: &Registrant, field: FieldKey) -> &str {
    match field {
        FieldKey::Ticket => &entry.ticket_number.0,
        FieldKey::FirstName => &entry.first_name,
        FieldKey::LastName => &entry.last_name,
        FieldKey::Address => entry.address.as_deref().unwrap_or_default(),
        FieldKey::IdentityCode => entry.identity_code.as_deref().unwrap_or_default(),
        FieldKey::Phone => &entry.phone,
    }
}
