//! Core design vocabulary: room types, decorating styles, and the
//! immutable record a completed render leaves behind.

use image::RgbaImage;
use uuid::Uuid;

/// The kind of room shown in the photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    Office,
}

impl RoomType {
    pub fn all() -> &'static [RoomType] {
        &[
            RoomType::LivingRoom,
            RoomType::Bedroom,
            RoomType::Kitchen,
            RoomType::Bathroom,
            RoomType::Office,
        ]
    }

    /// Translated display name for combo boxes and the gallery overlay.
    pub fn label(&self) -> String {
        match self {
            RoomType::LivingRoom => t!("room.living_room"),
            RoomType::Bedroom => t!("room.bedroom"),
            RoomType::Kitchen => t!("room.kitchen"),
            RoomType::Bathroom => t!("room.bathroom"),
            RoomType::Office => t!("room.office"),
        }
    }

    /// Stable machine name used for logging.
    pub fn slug(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "living-room",
            RoomType::Bedroom => "bedroom",
            RoomType::Kitchen => "kitchen",
            RoomType::Bathroom => "bathroom",
            RoomType::Office => "office",
        }
    }
}

impl Default for RoomType {
    fn default() -> Self {
        RoomType::LivingRoom
    }
}

/// The decorating style to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleType {
    Tropical,
    Modern,
    Minimalist,
    Industrial,
    Scandinavian,
}

impl StyleType {
    pub fn all() -> &'static [StyleType] {
        &[
            StyleType::Tropical,
            StyleType::Modern,
            StyleType::Minimalist,
            StyleType::Industrial,
            StyleType::Scandinavian,
        ]
    }

    pub fn label(&self) -> String {
        match self {
            StyleType::Tropical => t!("style.tropical"),
            StyleType::Modern => t!("style.modern"),
            StyleType::Minimalist => t!("style.minimalist"),
            StyleType::Industrial => t!("style.industrial"),
            StyleType::Scandinavian => t!("style.scandinavian"),
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            StyleType::Tropical => "tropical",
            StyleType::Modern => "modern",
            StyleType::Minimalist => "minimalist",
            StyleType::Industrial => "industrial",
            StyleType::Scandinavian => "scandinavian",
        }
    }
}

impl Default for StyleType {
    fn default() -> Self {
        StyleType::Tropical
    }
}

/// Snapshot of one completed render: the input image and the selections
/// that were active when the render was triggered. Never mutated after
/// creation.
#[derive(Clone)]
pub struct DesignRecord {
    /// Session-local id, used only to name this record's GPU texture.
    pub id: Uuid,
    pub image: RgbaImage,
    pub room: RoomType,
    pub style: StyleType,
}

impl DesignRecord {
    pub fn new(image: RgbaImage, room: RoomType, style: StyleType) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            room,
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_living_room_tropical() {
        assert_eq!(RoomType::default(), RoomType::LivingRoom);
        assert_eq!(StyleType::default(), StyleType::Tropical);
    }

    #[test]
    fn enumerations_are_complete() {
        assert_eq!(RoomType::all().len(), 5);
        assert_eq!(StyleType::all().len(), 5);
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in RoomType::all().iter().enumerate() {
            for b in RoomType::all().iter().skip(i + 1) {
                assert_ne!(a.slug(), b.slug());
            }
        }
        for (i, a) in StyleType::all().iter().enumerate() {
            for b in StyleType::all().iter().skip(i + 1) {
                assert_ne!(a.slug(), b.slug());
            }
        }
    }

    #[test]
    fn records_keep_their_inputs() {
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
        let rec = DesignRecord::new(img.clone(), RoomType::Kitchen, StyleType::Industrial);
        assert_eq!(rec.image, img);
        assert_eq!(rec.room, RoomType::Kitchen);
        assert_eq!(rec.style, StyleType::Industrial);
    }
}
