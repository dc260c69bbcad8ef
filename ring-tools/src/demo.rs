//! Walk-through of every read path of a [`RingBuffer`].

use std::fmt::Display;

use ring_buffer::RingBuffer;

/// One labelled line of demo output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub items: Vec<String>,
}

impl Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "buffer contains ({}):", self.label)?;
        for item in &self.items {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}

fn render<'a, T: Display + 'a>(items: impl Iterator<Item = &'a T>) -> Vec<String> {
    items.map(ToString::to_string).collect()
}

/// Read `buffer` through the forward view, the reverse view, a manually
/// stepped reverse view, and relative indexing in both directions.
pub fn report<T: Display>(buffer: &RingBuffer<T>) -> Vec<ReportLine> {
    // Step a reverse view until it equals an exhausted one
    let mut end = buffer.iter_rev();
    end.by_ref().for_each(drop);
    let mut rit = buffer.iter_rev();
    let mut stepped = Vec::with_capacity(buffer.len());
    while rit != end {
        if let Some(item) = rit.next() {
            stepped.push(item.to_string());
        }
    }

    vec![
        ReportLine {
            label: "iterator, oldest to newest",
            items: render(buffer.iter()),
        },
        ReportLine {
            label: "reverse iterator, newest to oldest",
            items: render(buffer.iter_rev()),
        },
        ReportLine {
            label: "reverse iterator, newest to oldest, stepped",
            items: stepped,
        },
        ReportLine {
            label: "indexed access, newest to oldest",
            items: render((0..buffer.len() as isize).map(|i| &buffer[i])),
        },
        ReportLine {
            label: "indexed access, oldest to newest",
            items: match buffer.oldest_index() {
                Some(oldest) => render((oldest..=0).map(|i| &buffer[i])),
                None => Vec::new(),
            },
        },
    ]
}
