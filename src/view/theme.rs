/// Class names the renderer attaches to each element.
pub mod class {
    pub const CONTAINER: &str = "mn-container";
    pub const HEADER: &str = "mn-header";
    pub const LOGO: &str = "mn-logo";
    pub const TITLE: &str = "mn-title";
    pub const NEWS_CONTAINER: &str = "mn-news-container";
    pub const NEWS_ITEM: &str = "mn-news-item";
    pub const NEWS_META: &str = "mn-news-meta";
    pub const NEWS_TITLE: &str = "mn-news-title";
    pub const DIVIDER: &str = "mn-divider";
    pub const NEWS_SUMMARY: &str = "mn-news-summary";
}

/// An ordered set of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property`, replacing an earlier value in place.
    pub fn with(mut self, property: &str, value: &str) -> Self {
        match self.declarations.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self
                .declarations
                .push((property.to_string(), value.to_string())),
        }
        self
    }

    /// Compose two styles; declarations in `other` win.
    pub fn merge(&self, other: &Style) -> Style {
        other
            .declarations
            .iter()
            .fold(self.clone(), |acc, (p, v)| acc.with(p, v))
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations as `prop: value;` pairs separated by spaces.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Design-token table for the macro news view.
///
/// Passed explicitly to the render functions; nothing reads a global theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub container: Style,
    pub header: Style,
    pub logo: Style,
    pub title: Style,
    pub news_container: Style,
    /// Width of one of the three columns the card grid wraps into.
    pub column: Style,
    pub card: Style,
    pub news_meta: Style,
    pub news_title: Style,
    pub news_link: Style,
    pub news_link_hover: Style,
    pub divider: Style,
    pub news_summary: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            container: Style::new()
                .with("max-width", "1200px")
                .with("margin", "0 auto")
                .with("padding", "0 20px"),
            header: Style::new()
                .with("background-color", "#000")
                .with("color", "#fff")
                .with("padding", "20px 0")
                .with("text-align", "center"),
            logo: Style::new()
                .with("font-size", "48px")
                .with("font-weight", "bold")
                .with("font-style", "italic")
                .with("cursor", "pointer"),
            title: Style::new()
                .with("font-size", "36px")
                .with("text-align", "center")
                .with("margin", "30px 0")
                .with("border-bottom", "2px solid #000")
                .with("padding-bottom", "10px"),
            news_container: Style::new()
                .with("display", "flex")
                .with("flex-wrap", "wrap")
                .with("justify-content", "space-between")
                .with("margin-top", "30px"),
            column: Style::new().with("width", "calc(33.33% - 5px)"),
            card: Style::new()
                .with("background-color", "#fff")
                .with("border", "1px solid #ddd")
                .with("padding", "15px")
                .with("margin-bottom", "10px"),
            news_meta: Style::new()
                .with("font-size", "12px")
                .with("color", "#666")
                .with("margin-bottom", "8px")
                .with("font-style", "italic"),
            news_title: Style::new()
                .with("font-size", "20px")
                .with("font-weight", "bold")
                .with("margin-bottom", "10px")
                .with("line-height", "1.2"),
            news_link: Style::new()
                .with("color", "#000")
                .with("text-decoration", "none"),
            news_link_hover: Style::new().with("text-decoration", "underline"),
            divider: Style::new()
                .with("border-top", "1px solid #ddd")
                .with("margin", "10px 0"),
            news_summary: Style::new()
                .with("font-size", "14px")
                .with("line-height", "1.4")
                .with("overflow", "hidden")
                .with("text-overflow", "ellipsis")
                .with("display", "-webkit-box")
                .with("-webkit-line-clamp", "6")
                .with("-webkit-box-orient", "vertical")
                .with("line-clamp", "6"),
        }
    }
}

impl Theme {
    /// Card style: the column width composed with the card tokens.
    pub fn card_style(&self) -> Style {
        self.column.merge(&self.card)
    }

    /// Stylesheet covering every class in [`class`], in a fixed order.
    pub fn stylesheet(&self) -> String {
        let card = self.card_style();
        let rules: [(String, &Style); 12] = [
            (format!(".{}", class::CONTAINER), &self.container),
            (format!(".{}", class::HEADER), &self.header),
            (format!(".{}", class::LOGO), &self.logo),
            (format!(".{}", class::TITLE), &self.title),
            (format!(".{}", class::NEWS_CONTAINER), &self.news_container),
            (format!(".{}", class::NEWS_ITEM), &card),
            (format!(".{}", class::NEWS_META), &self.news_meta),
            (format!(".{}", class::NEWS_TITLE), &self.news_title),
            (format!(".{} a", class::NEWS_TITLE), &self.news_link),
            (format!(".{} a:hover", class::NEWS_TITLE), &self.news_link_hover),
            (format!(".{}", class::DIVIDER), &self.divider),
            (format!(".{}", class::NEWS_SUMMARY), &self.news_summary),
        ];

        rules
            .iter()
            .filter(|(_, style)| !style.is_empty())
            .map(|(selector, style)| format!("{selector} {{ {} }}", style.to_css()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
