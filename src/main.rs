use folio::{
    DocumentGenerator, DownloadResponseFactory, FolioConfig, LopdfEngine, Output, Pdf, PdfError,
    RenderError,
};
use serde_json::{Value, json};
use std::env;
use std::io::Write;

/// Writes the `text` parameter onto the first page.
fn text_view(engine: &mut LopdfEngine, params: &Value) -> Result<(), RenderError> {
    engine.set_font("helvetica", "", 12.0)?;
    engine.add_page();
    engine.write(params["text"].as_str().unwrap_or_default())
}

/// A simple CLI to render text into a PDF and send it to a destination.
fn main() -> Result<(), PdfError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Renders text into a PDF and emits it to an output destination.");
        eprintln!();
        eprintln!("Usage: {} <path/to/config> <destination> [text...]", args[0]);
        eprintln!();
        eprintln!("Destinations:");
        eprintln!("  S   write the PDF to stdout");
        eprintln!("  F   save the PDF to the configured path and name");
        eprintln!("  D   print an attachment response (headers on stderr)");
        eprintln!("  I   print an inline response (headers on stderr)");
        eprintln!("  F can be combined with one other code, e.g. FS");
        std::process::exit(1);
    }

    let config_path = &args[1];
    let destination = &args[2];
    let text = args[3..].join(" ");

    let config = FolioConfig::load(config_path)?;
    let generator = DocumentGenerator::<LopdfEngine>::new().with_view("text", text_view);
    let pdf = Pdf::from_config(config, generator, DownloadResponseFactory);

    let document = pdf.generate("text", &json!({ "text": text }))?;

    match pdf.output(&document, destination)? {
        Output::Saved(true) => {
            println!(
                "Saved {}",
                document.path().join(document.name()).display()
            );
        }
        Output::Saved(false) => {
            eprintln!("Failed to save {}", document.name());
            std::process::exit(1);
        }
        Output::Content(content) => {
            std::io::stdout().write_all(&content)?;
        }
        Output::Response(response) => {
            eprintln!("{:?} {}", response.version(), response.status());
            for (name, value) in response.headers() {
                eprintln!("{}: {}", name, value.to_str().unwrap_or_default());
            }
            std::io::stdout().write_all(response.body())?;
        }
    }

    Ok(())
}
