use crate::fonts::standard_font_name;
use crate::text::{encode_win_ansi, text_string};
use folio_render_core::{EngineOptions, PdfEngine, RenderError};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, StringFormat, Stream};

const DEFAULT_FONT_FAMILY: &str = "helvetica";
const DEFAULT_FONT_SIZE: f32 = 12.0;
const DEFAULT_MARGIN_PT: f32 = 42.52;
const LINE_HEIGHT_RATIO: f32 = 1.25;
const PRODUCER: &str = concat!("folio-render-lopdf ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default)]
struct Metadata {
    author: String,
    creator: String,
    keywords: String,
    subject: String,
    title: String,
}

#[derive(Debug, Clone)]
struct Page {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
}

#[derive(Debug, Clone)]
struct FontSelection {
    resource: String,
    size: f32,
}

/// A PDF engine using the `lopdf` library.
///
/// Page content is kept as lopdf operations until `render` assembles the
/// final document, so cloning an engine deep-copies everything drawn so far.
/// Coordinates passed to the drawing calls are in the configured unit and
/// measured from the top-left corner of the page.
#[derive(Debug, Clone)]
pub struct LopdfEngine {
    options: EngineOptions,
    metadata: Metadata,
    pages: Vec<Page>,
    fonts: Vec<&'static str>,
    font: Option<FontSelection>,
    margin_left: f32,
    margin_top: f32,
    auto_page_break: Option<f32>,
    cursor_y: f32,
}

impl LopdfEngine {
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Starts a new page and moves the cursor to the top margin.
    pub fn add_page(&mut self) {
        let (width, height) = self.options.page_dimensions_pt();
        self.pages.push(Page {
            width,
            height,
            operations: Vec::new(),
        });
        self.cursor_y = self.margin_top;
    }

    /// Selects one of the standard fonts for subsequent text.
    pub fn set_font(&mut self, family: &str, style: &str, size: f32) -> Result<(), RenderError> {
        let base_font = standard_font_name(family, style)?;
        let index = match self.fonts.iter().position(|f| *f == base_font) {
            Some(index) => index,
            None => {
                self.fonts.push(base_font);
                self.fonts.len() - 1
            }
        };
        self.font = Some(FontSelection {
            resource: format!("F{}", index + 1),
            size,
        });
        Ok(())
    }

    pub fn set_margins(&mut self, left: f32, top: f32) {
        let unit = self.options.unit;
        self.margin_left = unit.to_pt(left);
        self.margin_top = unit.to_pt(top);
        if self.pages.is_empty() {
            self.cursor_y = self.margin_top;
        }
    }

    /// Enables or disables automatic page breaks `bottom` units above the page edge.
    pub fn set_auto_page_break(&mut self, enabled: bool, bottom: f32) {
        self.auto_page_break = enabled.then(|| self.options.unit.to_pt(bottom));
    }

    /// Writes text line by line from the cursor at the left margin.
    pub fn write(&mut self, text: &str) -> Result<(), RenderError> {
        let font = self.current_font()?;
        if self.pages.is_empty() {
            self.add_page();
        }
        let line_height = font.size * LINE_HEIGHT_RATIO;

        for line in text.lines() {
            let page_height = self.current_page()?.height;
            if let Some(bottom) = self.auto_page_break
                && self.cursor_y + line_height > page_height - bottom
            {
                self.add_page();
            }

            let baseline = self.cursor_y + font.size;
            let x = self.margin_left;
            self.push_text(&font, x, baseline, line)?;
            self.cursor_y += line_height;
        }
        Ok(())
    }

    /// Places a single line of text with its top-left corner at `(x, y)`.
    pub fn text(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError> {
        let font = self.current_font()?;
        if self.pages.is_empty() {
            self.add_page();
        }
        let unit = self.options.unit;
        self.push_text(&font, unit.to_pt(x), unit.to_pt(y) + font.size, text)
    }

    fn current_font(&mut self) -> Result<FontSelection, RenderError> {
        if self.font.is_none() {
            self.set_font(DEFAULT_FONT_FAMILY, "", DEFAULT_FONT_SIZE)?;
        }
        self.font
            .clone()
            .ok_or_else(|| RenderError::Font("No font selected".into()))
    }

    fn current_page(&self) -> Result<&Page, RenderError> {
        self.pages
            .last()
            .ok_or_else(|| RenderError::Other("No page started".into()))
    }

    fn push_text(
        &mut self,
        font: &FontSelection,
        x: f32,
        baseline: f32,
        text: &str,
    ) -> Result<(), RenderError> {
        let page = self
            .pages
            .last_mut()
            .ok_or_else(|| RenderError::Other("No page started".into()))?;
        // PDF space has its origin at the bottom-left corner.
        let y = page.height - baseline;
        page.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(font.resource.as_bytes().to_vec()),
                    font.size.into(),
                ],
            ),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
        Ok(())
    }

    fn info_dictionary(&self) -> Dictionary {
        let unicode = self.options.unicode;
        let mut info = Dictionary::new();
        let fields = [
            ("Title", &self.metadata.title),
            ("Author", &self.metadata.author),
            ("Subject", &self.metadata.subject),
            ("Keywords", &self.metadata.keywords),
            ("Creator", &self.metadata.creator),
        ];
        for (key, value) in fields {
            if !value.is_empty() {
                info.set(key, text_string(value, unicode));
            }
        }
        info.set("Producer", Object::string_literal(PRODUCER));
        let created = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        info.set("CreationDate", Object::string_literal(created));
        info
    }
}

impl PdfEngine for LopdfEngine {
    const NAME: &'static str = "LopdfEngine";

    fn new(options: EngineOptions) -> Result<Self, RenderError> {
        log::debug!(
            "Creating lopdf engine: {:?} {:?} {:?}",
            options.page_size,
            options.orientation,
            options.unit
        );

        Ok(Self {
            options,
            metadata: Metadata::default(),
            pages: Vec::new(),
            fonts: Vec::new(),
            font: None,
            margin_left: DEFAULT_MARGIN_PT,
            margin_top: DEFAULT_MARGIN_PT,
            auto_page_break: Some(DEFAULT_MARGIN_PT),
            cursor_y: DEFAULT_MARGIN_PT,
        })
    }

    fn set_author(&mut self, author: &str) {
        self.metadata.author = author.to_string();
    }

    fn set_creator(&mut self, creator: &str) {
        self.metadata.creator = creator.to_string();
    }

    fn set_keywords(&mut self, keywords: &str) {
        self.metadata.keywords = keywords.to_string();
    }

    fn set_subject(&mut self, subject: &str) {
        self.metadata.subject = subject.to_string();
    }

    fn set_title(&mut self, title: &str) {
        self.metadata.title = title.to_string();
    }

    fn render(&self) -> Result<Vec<u8>, RenderError> {
        let version = if self.options.pdfa { "1.4" } else { "1.7" };
        let mut doc = Document::with_version(version);
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (i, base_font) in self.fonts.iter().enumerate() {
            let single_font_dict = dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => *base_font, "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(format!("F{}", i + 1), Object::Dictionary(single_font_dict));
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
        });

        // A document without pages is not valid PDF, so emit one blank page.
        let blank;
        let pages: &[Page] = if self.pages.is_empty() {
            let (width, height) = self.options.page_dimensions_pt();
            blank = [Page {
                width,
                height,
                operations: Vec::new(),
            }];
            &blank
        } else {
            &self.pages
        };

        let mut kids = Vec::with_capacity(pages.len());
        for page in pages {
            let content = Content {
                operations: page.operations.clone(),
            };
            let encoded = content
                .encode()
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0.into(), 0.0.into(), page.width.into(), page.height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(self.info_dictionary());
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        log::debug!(
            "Rendered {} page(s) into {} bytes",
            pages.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}
