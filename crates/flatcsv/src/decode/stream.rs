use crate::Record;
use crate::decode::parser::Parser;
use crate::error::Result;
use crate::options::ParseOptions;

#[cfg(feature = "async")]
use core::pin::Pin;
#[cfg(feature = "async")]
use core::task::{Context, Poll};
#[cfg(feature = "async")]
use futures::Stream;

fn feed_item(parser: &mut Parser, chunk: &str, per_line: bool) -> Result<()> {
    parser.feed(chunk)?;
    if per_line {
        // A line source carries no terminators; restore one so quoted
        // fields can still span source items.
        parser.feed("\n")?;
    }
    Ok(())
}

/// Lazy record sequence over a synchronous chunk source.
///
/// Yields records in row order, pulling the next chunk only once every
/// record completed so far has been handed out. Fuses after the first
/// error.
pub struct Records<I> {
    parser: Parser,
    source: I,
    per_line: bool,
    finished: bool,
    done: bool,
}

impl<I> Records<I> {
    pub(crate) fn new(source: I, options: &ParseOptions, per_line: bool) -> Self {
        Self {
            parser: Parser::new(options),
            source,
            per_line,
            finished: false,
            done: false,
        }
    }
}

impl<I> Iterator for Records<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if let Some(record) = self.parser.next_record() {
                return Some(Ok(record));
            }
            if self.finished {
                self.done = true;
                return None;
            }
            let outcome = match self.source.next() {
                Some(chunk) => feed_item(&mut self.parser, chunk.as_ref(), self.per_line),
                None => {
                    self.finished = true;
                    self.parser.finish()
                }
            };
            if let Err(err) = outcome {
                self.done = true;
                return Some(Err(err));
            }
        }
    }
}

/// [`Records`] over an asynchronous chunk source.
///
/// Suspension points are exactly the chunk pulls; the scan itself never
/// awaits.
#[cfg(feature = "async")]
pub struct RecordStream<S> {
    parser: Parser,
    source: S,
    per_line: bool,
    finished: bool,
    done: bool,
}

#[cfg(feature = "async")]
impl<S> RecordStream<S> {
    pub(crate) fn new(source: S, options: &ParseOptions, per_line: bool) -> Self {
        Self {
            parser: Parser::new(options),
            source,
            per_line,
            finished: false,
            done: false,
        }
    }
}

#[cfg(feature = "async")]
impl<S> Stream for RecordStream<S>
where
    S: Stream + Unpin,
    S::Item: AsRef<str>,
{
    type Item = Result<Record>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if this.done {
                return Poll::Ready(None);
            }
            if let Some(record) = this.parser.next_record() {
                return Poll::Ready(Some(Ok(record)));
            }
            if this.finished {
                this.done = true;
                return Poll::Ready(None);
            }
            let outcome = match Pin::new(&mut this.source).poll_next(cx) {
                Poll::Ready(Some(chunk)) => {
                    feed_item(&mut this.parser, chunk.as_ref(), this.per_line)
                }
                Poll::Ready(None) => {
                    this.finished = true;
                    this.parser.finish()
                }
                Poll::Pending => return Poll::Pending,
            };
            if let Err(err) = outcome {
                this.done = true;
                return Poll::Ready(Some(Err(err)));
            }
        }
    }
}
