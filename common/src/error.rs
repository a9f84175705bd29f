use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolError {
    #[error("{0:?} is not a letter of the alphabet a-z")]
    NotALetter(char),
    #[error("byte {0:#04x} is not a letter of the alphabet a-z")]
    NotALetterByte(u8),
    #[error("symbol index {0} is out of range")]
    IndexOutOfRange(usize),
}
