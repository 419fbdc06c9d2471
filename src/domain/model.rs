use std::fmt;
use std::io::{self, Write};

/// Device category, decided once by the payload a device is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cable,
    Case,
    Capability,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cable, Category::Case, Category::Capability];

    /// Number shown next to the category in the selection menu.
    pub fn choice(self) -> u32 {
        match self {
            Category::Cable => 1,
            Category::Case => 2,
            Category::Capability => 3,
        }
    }

    pub fn from_choice(choice: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.choice() == choice)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Cable => "Кабель",
            Category::Case => "Корпус",
            Category::Capability => "Возможность",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CableDetails {
    length: i32,
}

impl CableDetails {
    pub fn new(length: i32) -> Self {
        Self { length }
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn device_info(&self) -> String {
        format!("Детали кабеля: длина = {}", self.length)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseDetails {
    material: String,
}

impl CaseDetails {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
        }
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn device_info(&self) -> String {
        format!("Детали корпуса: материал = {}", self.material)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityDetails {
    feature: String,
}

impl CapabilityDetails {
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
        }
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn device_info(&self) -> String {
        format!("Детали возможности: особенность = {}", self.feature)
    }
}

/// Category-specific data carried by a [`Device`].
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPayload {
    Cable(CableDetails),
    Case(CaseDetails),
    Capability(CapabilityDetails),
}

impl DetailPayload {
    pub fn category(&self) -> Category {
        match self {
            DetailPayload::Cable(_) => Category::Cable,
            DetailPayload::Case(_) => Category::Case,
            DetailPayload::Capability(_) => Category::Capability,
        }
    }

    pub fn device_info(&self) -> String {
        match self {
            DetailPayload::Cable(details) => details.device_info(),
            DetailPayload::Case(details) => details.device_info(),
            DetailPayload::Capability(details) => details.device_info(),
        }
    }
}

impl From<CableDetails> for DetailPayload {
    fn from(details: CableDetails) -> Self {
        DetailPayload::Cable(details)
    }
}

impl From<CaseDetails> for DetailPayload {
    fn from(details: CaseDetails) -> Self {
        DetailPayload::Case(details)
    }
}

impl From<CapabilityDetails> for DetailPayload {
    fn from(details: CapabilityDetails) -> Self {
        DetailPayload::Capability(details)
    }
}

/// The connect/disconnect pair. Only cable and capability payloads implement it,
/// so a case can never be connected:
///
/// ```compile_fail
/// use accessory_catalog::{CaseDetails, Connectable};
///
/// CaseDetails::new("steel").connect();
/// ```
pub trait Connectable {
    fn connect_message(&self) -> &'static str;
    fn disconnect_message(&self) -> &'static str;

    fn connect_to(&self, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!("connect: {}", self.connect_message());
        writeln!(out, "{}", self.connect_message())
    }

    fn disconnect_to(&self, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!("disconnect: {}", self.disconnect_message());
        writeln!(out, "{}", self.disconnect_message())
    }

    /// Prints the connect message on stdout.
    fn connect(&self) {
        if let Err(e) = self.connect_to(&mut io::stdout().lock()) {
            tracing::warn!("Could not print connect message: {}", e);
        }
    }

    fn disconnect(&self) {
        if let Err(e) = self.disconnect_to(&mut io::stdout().lock()) {
            tracing::warn!("Could not print disconnect message: {}", e);
        }
    }
}

impl Connectable for CableDetails {
    fn connect_message(&self) -> &'static str {
        "Кабель подключен."
    }

    fn disconnect_message(&self) -> &'static str {
        "Кабель отключен."
    }
}

impl Connectable for CapabilityDetails {
    fn connect_message(&self) -> &'static str {
        "Возможность подключена."
    }

    fn disconnect_message(&self) -> &'static str {
        "Возможность отключена."
    }
}

/// A brand, a price and exactly one detail payload. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    brand: String,
    price: f64,
    detail: DetailPayload,
}

impl Device {
    pub fn new(brand: impl Into<String>, price: f64, detail: impl Into<DetailPayload>) -> Self {
        Self {
            brand: brand.into(),
            price,
            detail: detail.into(),
        }
    }

    pub fn cable(brand: impl Into<String>, price: f64, length: i32) -> Self {
        Self::new(brand, price, CableDetails::new(length))
    }

    pub fn case(brand: impl Into<String>, price: f64, material: impl Into<String>) -> Self {
        Self::new(brand, price, CaseDetails::new(material))
    }

    pub fn capability(brand: impl Into<String>, price: f64, feature: impl Into<String>) -> Self {
        Self::new(brand, price, CapabilityDetails::new(feature))
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn details(&self) -> &DetailPayload {
        &self.detail
    }

    pub fn category(&self) -> Category {
        self.detail.category()
    }

    /// `None` for cases.
    pub fn as_connectable(&self) -> Option<&dyn Connectable> {
        match &self.detail {
            DetailPayload::Cable(details) => Some(details as &dyn Connectable),
            DetailPayload::Capability(details) => Some(details),
            DetailPayload::Case(_) => None,
        }
    }

    /// One-line summary, e.g. `Кабель [бренд=Anker, цена=9.99, длина=2]`.
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.category().label();
        write!(f, "{} [бренд={}, цена={}, ", label, self.brand, self.price)?;
        match &self.detail {
            DetailPayload::Cable(details) => write!(f, "длина={}]", details.length()),
            DetailPayload::Case(details) => write!(f, "материал={}]", details.material()),
            DetailPayload::Capability(details) => {
                write!(f, "особенность={}]", details.feature())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cable_info() {
        let cable = Device::cable("Anker", 9.99, 2);
        assert_eq!(cable.info(), "Кабель [бренд=Anker, цена=9.99, длина=2]");
        assert_eq!(cable.category(), Category::Cable);
    }

    #[test]
    fn test_case_info() {
        let case = Device::case("Spigen", 14.5, "silicone");
        assert_eq!(
            case.info(),
            "Корпус [бренд=Spigen, цена=14.5, материал=silicone]"
        );
        assert!(case.as_connectable().is_none());
    }

    #[test]
    fn test_capability_info_survives_connect() {
        let capability = Device::capability("X", 0.0, "NFC");
        let before = capability.info();
        assert_eq!(before, "Возможность [бренд=X, цена=0, особенность=NFC]");

        let connectable = capability.as_connectable().unwrap();
        connectable.connect();
        connectable.disconnect();

        assert_eq!(capability.info(), before);
    }

    #[test]
    fn test_permissive_values() {
        let cable = Device::cable("", -3.0, -1);
        assert_eq!(cable.info(), "Кабель [бренд=, цена=-3, длина=-1]");

        let case = Device::case("", 0.5, "");
        assert_eq!(case.info(), "Корпус [бренд=, цена=0.5, материал=]");
    }

    #[test]
    fn test_details_returns_supplied_payload() {
        let payload = DetailPayload::from(CaseDetails::new("aluminium"));
        let device = Device::new("Nillkin", 20.0, payload.clone());
        assert_eq!(device.details(), &payload);
        assert_eq!(device.brand(), "Nillkin");
        assert_eq!(device.price(), 20.0);
    }

    #[test]
    fn test_connect_messages() {
        let cable = CableDetails::new(1);
        assert_eq!(cable.connect_message(), "Кабель подключен.");
        assert_eq!(cable.disconnect_message(), "Кабель отключен.");

        let capability = CapabilityDetails::new("Qi");
        assert_eq!(capability.connect_message(), "Возможность подключена.");
        assert_eq!(capability.disconnect_message(), "Возможность отключена.");
    }

    #[test]
    fn test_connect_prints_fixed_lines() {
        let cable = Device::cable("Anker", 9.99, 2);
        let before = cable.info();
        let mut out = Vec::new();

        let connectable = cable.as_connectable().unwrap();
        connectable.connect_to(&mut out).unwrap();
        connectable.disconnect_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Кабель подключен.\nКабель отключен.\n"
        );

        let mut out = Vec::new();
        let capability = CapabilityDetails::new("NFC");
        capability.connect_to(&mut out).unwrap();
        capability.disconnect_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Возможность подключена.\nВозможность отключена.\n"
        );

        assert_eq!(cable.info(), before);
    }

    #[test]
    fn test_device_info_lines() {
        assert_eq!(CableDetails::new(3).device_info(), "Детали кабеля: длина = 3");
        assert_eq!(
            DetailPayload::from(CaseDetails::new("leather")).device_info(),
            "Детали корпуса: материал = leather"
        );
        assert_eq!(
            CapabilityDetails::new("NFC").device_info(),
            "Детали возможности: особенность = NFC"
        );
    }

    #[test]
    fn test_category_choice() {
        assert_eq!(Category::from_choice(1), Some(Category::Cable));
        assert_eq!(Category::from_choice(2), Some(Category::Case));
        assert_eq!(Category::from_choice(3), Some(Category::Capability));
        assert_eq!(Category::from_choice(0), None);
        assert_eq!(Category::from_choice(4), None);
        assert_eq!(Category::Capability.to_string(), "Возможность");
    }
}
