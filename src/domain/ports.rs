use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn max_devices(&self) -> usize;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn write_file_enabled(&self) -> bool;
}
