/// The slice of session history the router drives.
///
/// Implementations are handles onto shared session state, the way a
/// browser adapter wraps the one history object of the page: methods take
/// `&self` and the state may change between calls through other handles
/// (or the visitor's back button). Paths are absolute, exactly as the
/// address bar shows them.
pub trait History {
    /// Current path.
    fn path(&self) -> String;

    /// Append a new entry and make it current.
    fn push(&self, path: &str);

    /// Overwrite the current entry without growing the stack.
    fn replace(&self, path: &str);
}
