//! Decoding of the streaming API's server-sent events.
//!
//! [`Lines`](struct.Lines.html) reassembles raw body chunks into lines and
//! [`Timeline`](struct.Timeline.html) turns those lines into typed events.

use api;
use error::*;
use mapper::{Mapper, NotificationMapper, StatusMapper};

#[derive(Clone, Copy, Debug, PartialEq)]
enum EventType {
    Update,
    Notification,
    Delete,
}

#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Timeline<I> {
    lines: I,
    waiting_for: Option<EventType>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Event {
    Update(Box<api::Status>),
    Notification(Box<api::Notification>),
    Delete(api::StatusId),
    Heartbeat,
}

impl<I> Timeline<I>
where
    I: Iterator<Item = Result<String>>,
{
    pub fn from_lines(lines: I) -> Timeline<I> {
        Timeline {
            lines,
            waiting_for: None,
        }
    }

    fn decode(event_type: EventType, data: &str) -> Result<Event> {
        match event_type {
            EventType::Update => StatusMapper
                .map_data(data.as_bytes())
                .chain_err(|| ErrorKind::JsonDecode(data.to_string()))
                .map(|status| Event::Update(Box::new(status))),
            EventType::Notification => NotificationMapper
                .map_data(data.as_bytes())
                .chain_err(|| ErrorKind::JsonDecode(data.to_string()))
                .map(|notification| Event::Notification(Box::new(notification))),
            EventType::Delete => data.trim()
                .parse::<api::StatusId>()
                .chain_err(|| ErrorKind::InvalidNumber(data.to_string()))
                .map(Event::Delete),
        }
    }

    fn next_event(&mut self) -> Result<Option<Event>> {
        use self::EventType::*;

        while let Some(line) = self.lines.next() {
            let line = line?;

            if line.starts_with(':') {
                trace!("heartbeat");
                return Ok(Some(Event::Heartbeat));
            }

            if let Some(event_type) = self.waiting_for.take() {
                if line.starts_with("data: ") {
                    return Self::decode(event_type, &line[6..]).map(Some);
                }

                // The pending event is abandoned either way
                warn!("expected data for {:?}, received `{}`", event_type, line);
                bail!(ErrorKind::IllegalState("data", line));
            } else if line.starts_with("event: ") {
                self.waiting_for = Some(match &line[7..] {
                    "update" => Update,
                    "delete" => Delete,
                    "notification" => Notification,
                    other => bail!(ErrorKind::UnknownEventType(other.to_string())),
                });
            } else if !line.is_empty() {
                bail!(ErrorKind::IllegalState("event", line));
            }
        }

        Ok(None)
    }
}

impl<I> Iterator for Timeline<I>
where
    I: Iterator<Item = Result<String>>,
{
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Lines<I> {
    chunks: I,
    buffer: Vec<u8>,
}

impl<I, B> Lines<I>
where
    B: AsRef<[u8]>,
    I: Iterator<Item = B>,
{
    pub fn new(chunks: I) -> Self {
        Lines {
            chunks,
            buffer: Vec::new(),
        }
    }
}

impl<I, B> Iterator for Lines<I>
where
    B: AsRef<[u8]>,
    I: Iterator<Item = B>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(index) = self.buffer.iter().position(|c| *c == b'\n') {
                let mut split = self.buffer.split_off(index + 1);
                ::std::mem::swap(&mut self.buffer, &mut split);
                split.pop(); // Remove trailing newline

                return Some(String::from_utf8(split).chain_err(|| ErrorKind::Utf8));
            }

            // An unterminated trailing line is dropped
            let chunk = self.chunks.next()?;
            self.buffer.extend_from_slice(chunk.as_ref());
        }
    }
}
