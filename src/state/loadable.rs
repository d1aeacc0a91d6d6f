// ============================================================================
// LOADABLE - Fetched list with its fetch outcome
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Loadable::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut Vec<T>> {
        match self {
            Loadable::Loaded(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Loadable::Loaded(_))
    }

    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Loadable::Loaded(items),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }
}
