//! The fixed lab and kit catalog.
//!
//! This is the single source of truth for names and prices. Amounts charged
//! at booking time are always resolved here, server-side — a price sent by
//! the client is never trusted. Prices are stored in cents; the pricing
//! engine derives whole-dollar figures from the same table.

/// A bookable cooking lab.
#[derive(Debug, Clone, Copy)]
pub struct Lab {
    pub id: &'static str,
    pub name: &'static str,
    pub price_cents: i64,
}

/// An add-on kit sold alongside a lab booking.
#[derive(Debug, Clone, Copy)]
pub struct Kit {
    pub id: &'static str,
    pub name: &'static str,
    pub price_cents: i64,
    pub delivery: KitDelivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitDelivery {
    Ship,
    Pickup,
}

pub const LABS: &[Lab] = &[
    Lab { id: "c1", name: "Dosa Mastery Lab", price_cents: 8900 },
    Lab { id: "c2", name: "Idli Perfect Lab", price_cents: 8900 },
    Lab { id: "c3", name: "Sambar Base Lab", price_cents: 4900 },
    Lab { id: "c4", name: "Chutneys 4 Ways", price_cents: 4900 },
    Lab { id: "c5", name: "South Indian Starter Pack", price_cents: 19900 },
    Lab { id: "c6", name: "Weekend Family Dosa Lab", price_cents: 24900 },
    Lab { id: "c7", name: "Kids Dosa Lab", price_cents: 3900 },
];

pub const KITS: &[Kit] = &[
    Kit { id: "k1", name: "Dosa Starter Pan Kit", price_cents: 5900, delivery: KitDelivery::Ship },
    Kit { id: "k2", name: "Chutney Spice Kit", price_cents: 2400, delivery: KitDelivery::Ship },
    Kit { id: "k3", name: "Fresh Fermented Batter (32oz)", price_cents: 1200, delivery: KitDelivery::Pickup },
];

/// Look up a lab by ID.
pub fn find_lab(id: &str) -> Option<&'static Lab> {
    LABS.iter().find(|lab| lab.id == id)
}

/// Look up a kit by ID.
pub fn find_kit(id: &str) -> Option<&'static Kit> {
    KITS.iter().find(|kit| kit.id == id)
}
