mod ocr;
mod tesseract_ocr;

pub use ocr::{Ocr, OcrResult};
pub use tesseract_ocr::TesseractOcr;
