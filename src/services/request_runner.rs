//! Background request runner
//!
//! Runs backend calls on worker threads so the UI loop never blocks, and
//! hands the replies back when the loop polls on tick.

use super::dispatch::{execute, Reply, Request};
use super::Services;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Instant;
use tracing::debug;

/// A finished request, tagged with the navigation generation it was issued in
#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub label: &'static str,
    pub reply: Reply,
}

/// Spawns requests and collects their completions
pub struct RequestRunner {
    services: Services,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
    in_flight: usize,
}

impl RequestRunner {
    pub fn new(services: Services) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            services,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Number of requests spawned but not yet polled
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Run `request` on a worker thread
    pub fn spawn(&mut self, generation: u64, request: Request) {
        let label = request.label();
        let services = self.services.clone();
        let tx = self.sender.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let started = Instant::now();
            let reply = execute(&services, request);
            debug!(
                label,
                generation,
                elapsed_ms = started.elapsed().as_millis() as u64,
                ok = reply.error().is_none(),
                "request finished"
            );
            let _ = tx.send(Completion {
                generation,
                label,
                reply,
            });
        });
    }

    /// Drain every completion that has arrived since the last poll
    pub fn poll(&mut self) -> Vec<Completion> {
        let mut done = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(completion) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    done.push(completion);
                }
                // The runner keeps a sender, so the channel never disconnects
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        done
    }

    /// Block until one completion arrives
    #[cfg(test)]
    pub fn wait(&mut self, timeout: std::time::Duration) -> Option<Completion> {
        let completion = self.receiver.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::envelope::ListQuery;
    use crate::services::http::fake::client;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_completion_carries_generation() {
        let (api, transport, _) = client();
        transport.respond(200, json!({"data": {"data": [], "total": 4}, "message": ""}));

        let mut runner = RequestRunner::new(Services::new(api));
        runner.spawn(7, Request::Courses(ListQuery::new(10)));
        assert_eq!(runner.in_flight(), 1);

        let completion = runner.wait(Duration::from_secs(5)).unwrap();
        assert_eq!(completion.generation, 7);
        assert_eq!(completion.label, "courses");
        assert!(matches!(completion.reply, Reply::Courses(Ok(ref page)) if page.total == 4));
        assert!(!runner.is_busy());
    }

    #[test]
    fn test_poll_without_completions_is_empty() {
        let (api, _, _) = client();
        let mut runner = RequestRunner::new(Services::new(api));
        assert!(runner.poll().is_empty());
    }

    #[test]
    fn test_failures_are_delivered_as_replies() {
        let (api, _, _) = client();
        let mut runner = RequestRunner::new(Services::new(api));
        runner.spawn(1, Request::Blog("b1".to_string()));

        let completion = runner.wait(Duration::from_secs(5)).unwrap();
        assert!(completion.reply.error().is_some());
    }
}
