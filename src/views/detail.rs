//! Detail subtree. Static content; the path below `/detail` is echoed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub rest: String,
}

impl DetailView {
    #[must_use]
    pub fn new(rest: String) -> Self {
        Self { rest }
    }

    #[must_use]
    pub fn render(&self) -> String {
        if self.rest.is_empty() {
            "Detail\n".to_owned()
        } else {
            format!("Detail\n  {}\n", self.rest)
        }
    }
}
