#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    pub path: String,
}

impl NotFoundView {
    #[must_use]
    pub fn new(path: String) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn render(&self) -> String {
        format!("404: page not found\n  {}\n", self.path)
    }
}
