use bindery::Book;
use bindery::book::PageDirection;
use bindery::errors::{BookError, BookResult};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Destination of the generated EPUB
    #[arg(short, long)]
    pub output: PathBuf,

    /// Publication title
    #[arg(long)]
    title: String,

    /// Publication author
    #[arg(long)]
    author: Option<String>,

    /// BCP-47 language code (default: en)
    #[arg(long)]
    language: Option<String>,

    /// Unique identifier (default: a generated urn:uuid)
    #[arg(long)]
    identifier: Option<String>,

    /// Page progression direction: ltr, rtl, or default
    #[arg(long)]
    direction: Option<PageDirection>,

    /// Stylesheet to embed; the first one is linked into every section
    #[arg(long = "css", value_name = "FILE")]
    stylesheets: Vec<String>,

    /// Font to embed
    #[arg(long = "font", value_name = "FILE")]
    fonts: Vec<String>,

    /// Image to embed
    #[arg(long = "image", value_name = "FILE")]
    images: Vec<String>,

    /// Cover image
    #[arg(long, value_name = "IMAGE")]
    cover: Option<String>,

    /// Stylesheet linked from the cover page
    #[arg(long, value_name = "CSS")]
    cover_css: Option<String>,

    /// Section body fragment, in reading order (an empty TITLE is listed as "Section N")
    #[arg(long = "section", value_name = "TITLE=FILE", value_parser = parse_section)]
    sections: Vec<(String, PathBuf)>,

    /// Deflate compression level (1-9)
    #[arg(long, default_value_t = 6)]
    compression: u8,
}

fn parse_section(value: &str) -> Result<(String, PathBuf), String> {
    value
        .split_once('=')
        .map(|(title, file)| (title.to_owned(), PathBuf::from(file)))
        .ok_or_else(|| format!("expected TITLE=FILE, found `{value}`"))
}

impl BuildCommand {
    pub fn build(&self) -> BookResult<()> {
        tracing::debug!(
            title = %self.title,
            sections = self.sections.len(),
            output = %self.output.display(),
            "assembling book"
        );
        let mut book = Book::new(&self.title);
        self.apply_metadata(&mut book);

        let mut stylesheets = Vec::with_capacity(self.stylesheets.len());
        for css in &self.stylesheets {
            stylesheets.push(book.add_css(css.as_str(), "")?);
        }
        for font in &self.fonts {
            book.add_font(font.as_str(), "")?;
        }
        for image in &self.images {
            book.add_image(image.as_str(), "")?;
        }

        if let Some(cover) = &self.cover {
            let image = book.add_image(cover.as_str(), "")?;
            let css = match &self.cover_css {
                Some(css) => book.add_css(css.as_str(), "")?,
                None => String::new(),
            };
            book.set_cover(&image, &css)?;
        }

        let stylesheet = stylesheets.first().map(String::as_str).unwrap_or_default();
        for (title, file) in &self.sections {
            let body = std::fs::read_to_string(file).map_err(|source| {
                BookError::SourceUnreadable {
                    path: file.clone(),
                    source,
                }
            })?;
            book.add_section(&body, title, "", stylesheet)?;
        }

        book.write().compression(self.compression).save(&self.output)
    }

    fn apply_metadata(&self, book: &mut Book) {
        if let Some(author) = &self.author {
            book.set_author(author);
        }
        if let Some(language) = &self.language {
            book.set_language(language);
        }
        if let Some(identifier) = &self.identifier {
            book.set_identifier(identifier);
        }
        if let Some(direction) = self.direction {
            book.set_page_direction(direction);
        }
    }
}
