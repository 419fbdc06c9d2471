use crate::core::Device;
use crate::utils::error::{CatalogError, Result};

pub const DEFAULT_CAPACITY: usize = 10;

/// Devices in entry order, never more than `capacity` of them.
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    devices: Vec<Device>,
    capacity: usize,
}

impl DeviceCatalog {
    pub fn new(capacity: usize) -> Self {
        Self {
            devices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, device: Device) -> Result<()> {
        if self.is_full() {
            return Err(CatalogError::CatalogFull {
                capacity: self.capacity,
            });
        }
        tracing::debug!("Stored device #{}: {}", self.devices.len() + 1, device);
        self.devices.push(device);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.devices.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    /// `info()` of every device, in entry order.
    pub fn info_lines(&self) -> Vec<String> {
        self.devices.iter().map(Device::info).collect()
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a DeviceCatalog {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut catalog = DeviceCatalog::new(2);
        assert!(catalog.is_empty());

        catalog.push(Device::cable("Anker", 9.99, 2)).unwrap();
        catalog.push(Device::case("Spigen", 14.5, "silicone")).unwrap();
        assert!(catalog.is_full());

        let err = catalog.push(Device::capability("X", 0.0, "NFC")).unwrap_err();
        assert!(matches!(err, CatalogError::CatalogFull { capacity: 2 }));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_info_lines_keep_entry_order() {
        let mut catalog = DeviceCatalog::default();
        catalog.push(Device::capability("X", 0.0, "NFC")).unwrap();
        catalog.push(Device::cable("Anker", 9.99, 2)).unwrap();

        assert_eq!(
            catalog.info_lines(),
            vec![
                "Возможность [бренд=X, цена=0, особенность=NFC]".to_string(),
                "Кабель [бренд=Anker, цена=9.99, длина=2]".to_string(),
            ]
        );
        assert_eq!(catalog.capacity(), DEFAULT_CAPACITY);
        assert_eq!((&catalog).into_iter().count(), 2);
    }
}
