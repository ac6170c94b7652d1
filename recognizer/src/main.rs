use ocr::TesseractOcr;
use tracing::{error, info};

use crate::error::RecognizerError;
use crate::log::init_log;
use crate::{args::Args, pipeline::Pipeline};

mod args;
mod error;
mod log;
mod picture;
mod pipeline;
mod sink;

/// 程序入口
fn application() -> Result<(), RecognizerError> {
    let args = Args::new();

    init_log(&args)?;

    let pipeline = Pipeline::from_args(&args);
    let summary = pipeline.run(|| {
        let engine = TesseractOcr::new(args.tessdata.as_deref(), &args.lang, args.dpi)?;
        info!("OCR 引擎已初始化, 语言: {}", engine.language());
        Ok(engine)
    })?;

    info!(
        "识别完成: {} 个字符已写入 {}, 置信度: {}",
        summary.chars, summary.output, summary.confidence
    );
    Ok(())
}

fn main() {
    if let Err(e) = application() {
        if tracing::dispatcher::has_been_set() {
            error!("程序存在异常: {}", e);
        } else {
            eprintln!("程序存在异常: {}", e);
        }
        std::process::exit(1);
    }
}
