use crate::core::{
    CableDetails, CapabilityDetails, CaseDetails, Category, DetailPayload, Device, DeviceCatalog,
};
use crate::utils::error::{CatalogError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const BRAND_PROMPT: &str = "Бренд: ";
pub const PRICE_PROMPT: &str = "Цена: ";
pub const CATEGORY_MENU_HEADER: &str = "Выберите тип устройства:";
pub const INVALID_CHOICE: &str = "Неверный выбор. Пожалуйста, выберите 1, 2 или 3.";
pub const INVALID_NUMBER: &str = "Некорректное число, попробуйте ещё раз.";
pub const CONTINUE_PROMPT: &str = "Продолжить ввод данных? (y/n): ";

pub fn detail_prompt(category: Category) -> &'static str {
    match category {
        Category::Cable => "Введите длину кабеля: ",
        Category::Case => "Введите материал корпуса: ",
        Category::Capability => "Введите особенность устройства: ",
    }
}

/// Prices are also accepted with a decimal comma, as typed on a Russian keyboard layout.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse().ok()
}

/// Line-oriented data entry over any reader/writer pair.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Fills `catalog` until it is full, the user declines to continue, or input ends.
    /// Returns how many devices were added.
    pub fn collect(&mut self, catalog: &mut DeviceCatalog) -> Result<usize> {
        let mut added = 0;

        while !catalog.is_full() {
            match self.read_device(catalog.len() + 1) {
                Ok(Some(device)) => {
                    tracing::info!("Device #{} entered: {}", catalog.len() + 1, device.category());
                    catalog.push(device)?;
                    added += 1;
                }
                Ok(None) => continue,
                Err(CatalogError::InputClosed) => {
                    tracing::info!("Input closed during device entry");
                    writeln!(self.output)?;
                    break;
                }
                Err(e) => return Err(e),
            }

            if catalog.is_full() {
                tracing::info!("Catalog reached its capacity of {}", catalog.capacity());
                break;
            }

            match self.prompt(CONTINUE_PROMPT) {
                Ok(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
                Ok(_) => break,
                Err(CatalogError::InputClosed) => {
                    writeln!(self.output)?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(added)
    }

    /// `Ok(None)` when the category choice is out of range; the entry starts over.
    fn read_device(&mut self, number: usize) -> Result<Option<Device>> {
        writeln!(self.output, "Введите данные для устройства {}:", number)?;
        let brand = self.prompt(BRAND_PROMPT)?;
        let price = self.prompt_parsed(PRICE_PROMPT, parse_price)?;

        writeln!(self.output, "{}", CATEGORY_MENU_HEADER)?;
        for category in Category::ALL {
            writeln!(self.output, "{}. {}", category.choice(), category.label())?;
        }
        let choice: i64 = self.prompt_number("")?;

        let category = match u32::try_from(choice).ok().and_then(Category::from_choice) {
            Some(category) => category,
            None => {
                tracing::debug!("Rejected category choice {}", choice);
                writeln!(self.output, "{}", INVALID_CHOICE)?;
                return Ok(None);
            }
        };

        let prompt = detail_prompt(category);
        let detail = match category {
            Category::Cable => DetailPayload::from(CableDetails::new(self.prompt_number(prompt)?)),
            Category::Case => DetailPayload::from(CaseDetails::new(self.prompt(prompt)?)),
            Category::Capability => {
                DetailPayload::from(CapabilityDetails::new(self.prompt(prompt)?))
            }
        };

        Ok(Some(Device::new(brand, price, detail)))
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<T> {
        self.prompt_parsed(text, |raw| raw.trim().parse().ok())
    }

    fn prompt_parsed<T>(&mut self, text: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        loop {
            let raw = self.prompt(text)?;
            match parse(raw.as_str()) {
                Some(value) => return Ok(value),
                None => {
                    tracing::debug!("Rejected numeric input {:?}", raw);
                    writeln!(self.output, "{}", INVALID_NUMBER)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CatalogError::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}
