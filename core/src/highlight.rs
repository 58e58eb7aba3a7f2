use crate::error::Result;

/// The page's syntax highlighting service, transforming a block in place.
pub trait Highlighter<B: ?Sized> {
    fn highlight(&self, block: &B) -> Result<()>;
}

impl<B: ?Sized, F> Highlighter<B> for F
where
    F: Fn(&B) -> Result<()>,
{
    fn highlight(&self, block: &B) -> Result<()> {
        self(block)
    }
}

/// Highlights `blocks` in order and returns how many were handled.
///
/// Stops at the first failure: when the service is missing every call fails
/// the same way.
pub fn highlight_all<'a, B, I, H>(blocks: I, highlighter: &H) -> Result<usize>
where
    B: ?Sized + 'a,
    I: IntoIterator<Item = &'a B>,
    H: Highlighter<B> + ?Sized,
{
    let mut count = 0;
    for block in blocks {
        highlighter.highlight(block)?;
        count += 1;
    }
    log::debug!("highlighted {} code blocks", count);
    Ok(count)
}
