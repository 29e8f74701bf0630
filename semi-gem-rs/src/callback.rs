// Copyright © 2024 Nathaniel Hardesty
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the “Software”), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

//! # CALLBACK AND EVENT FABRIC
//!
//! Two dispatch mechanisms sit between the wire layer and application code:
//!
//! - [CallbackHandler] binds a single name to a single callable, with a
//!   fallback chain of *target* objects consulted when no direct callback is
//!   bound (the `s<stream>f<function>` and `rcmd_<RCMD>` dispatch points).
//! - [EventProducer] fans a named firing out to every subscriber registered
//!   under that name, then to every registered target.
//!
//! Both replace the host language's attribute-assignment idiom
//! (`handler.s1f1 = callback`, `producer.ce100025 += subscriber`) with
//! explicit [bind][CallbackHandler::bind]/[subscribe][EventProducer::subscribe]
//! calls, and the `target._on_X` delegation fallback with the
//! [CallbackTarget]/[EventTarget] traits' optional methods.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A target object which may answer some subset of callback names.
///
/// Returning `None` means this target does not provide a slot for `name`;
/// [CallbackHandler::fire] then tries the next registered target.
pub trait CallbackTarget<A, R>: Send + Sync {
  fn on(&self, name: &str, args: A) -> Option<R>;
}

/// ## CALLBACK HANDLER
/// **Based on secsgem's `CallbackHandler`**
///
/// Name -> single callable, with target fallback. Thread-safe for
/// concurrent bind/unbind/fire from the reader thread and application
/// callers.
pub struct CallbackHandler<A, R> {
  callbacks: Mutex<HashMap<String, Arc<dyn Fn(A) -> R + Send + Sync>>>,
  targets: Mutex<Vec<Arc<dyn CallbackTarget<A, R>>>>,
}

impl<A: Clone, R> Default for CallbackHandler<A, R> {
  fn default() -> Self {
    Self {
      callbacks: Mutex::new(HashMap::new()),
      targets: Mutex::new(Vec::new()),
    }
  }
}

impl<A: Clone, R> CallbackHandler<A, R> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Bind `name` to `callback`, replacing any existing binding.
  pub fn bind(&self, name: impl Into<String>, callback: impl Fn(A) -> R + Send + Sync + 'static) {
    self.callbacks.lock().unwrap().insert(name.into(), Arc::new(callback));
  }

  /// Clear any direct binding for `name` (the `callback.name = null` case).
  /// Target fallback is unaffected.
  pub fn unbind(&self, name: &str) {
    self.callbacks.lock().unwrap().remove(name);
  }

  /// Register a delegate target consulted when no direct callback answers.
  pub fn add_target(&self, target: Arc<dyn CallbackTarget<A, R>>) {
    self.targets.lock().unwrap().push(target);
  }

  /// True if `name` would be answered by [fire][Self::fire]: either a direct
  /// callback is bound, or some registered target provides the slot.
  pub fn contains(&self, name: &str) -> bool where A: Default {
    if self.callbacks.lock().unwrap().contains_key(name) {
      return true;
    }
    let targets = self.targets.lock().unwrap();
    targets.iter().any(|target| target.on(name, A::default()).is_some())
  }

  /// Invoke the callback bound to `name`, falling back to each registered
  /// target in registration order. Returns `None` if nothing answers.
  pub fn fire(&self, name: &str, args: A) -> Option<R> {
    if let Some(callback) = self.callbacks.lock().unwrap().get(name).cloned() {
      return Some(callback(args));
    }
    for target in self.targets.lock().unwrap().iter() {
      if let Some(result) = target.on(name, args.clone()) {
        return Some(result);
      }
    }
    None
  }
}

/// A target object notified of every event firing.
pub trait EventTarget<P>: Send + Sync {
  /// Called only when this target provides a slot for this specific event
  /// name (the `_on_event_X` fallback).
  fn on_named_event(&self, _name: &str, _payload: &P) {}
  /// Called for every event regardless of name (the `_on_event` fallback).
  fn on_event(&self, _name: &str, _payload: &P) {}
}

/// ## EVENT PRODUCER
/// **Based on secsgem's `EventProducer`**
///
/// Name -> ordered list of subscribers, plus a target list notified on every
/// firing. Unlike [CallbackHandler], multiple subscribers may be registered
/// per name and all of them run.
pub struct EventProducer<P> {
  subscribers: Mutex<HashMap<String, Vec<Arc<dyn Fn(&P) + Send + Sync>>>>,
  targets: Mutex<Vec<Arc<dyn EventTarget<P>>>>,
}

impl<P> Default for EventProducer<P> {
  fn default() -> Self {
    Self {
      subscribers: Mutex::new(HashMap::new()),
      targets: Mutex::new(Vec::new()),
    }
  }
}

impl<P> EventProducer<P> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a subscriber under `name`; does not replace existing
  /// subscribers.
  pub fn subscribe(&self, name: impl Into<String>, subscriber: impl Fn(&P) + Send + Sync + 'static) {
    self.subscribers.lock().unwrap().entry(name.into()).or_default().push(Arc::new(subscriber));
  }

  /// Remove every subscriber registered under `name`.
  pub fn unsubscribe_all(&self, name: &str) {
    self.subscribers.lock().unwrap().remove(name);
  }

  pub fn add_target(&self, target: Arc<dyn EventTarget<P>>) {
    self.targets.lock().unwrap().push(target);
  }

  /// Fire `name` with `payload`: every subscriber registered under `name` in
  /// registration order, then every target's named and general hooks.
  pub fn fire(&self, name: &str, payload: &P) {
    let subscribers = {
      let guard = self.subscribers.lock().unwrap();
      guard.get(name).cloned().unwrap_or_default()
    };
    for subscriber in &subscribers {
      subscriber(payload);
    }
    for target in self.targets.lock().unwrap().iter() {
      target.on_named_event(name, payload);
      target.on_event(name, payload);
    }
  }

  /// Combine two producers' subscribers and targets into a new one.
  pub fn merge(self, other: Self) -> Self {
    let merged_subscribers = self.subscribers.into_inner().unwrap();
    let mut merged_subscribers2 = other.subscribers.into_inner().unwrap();
    let mut merged = merged_subscribers;
    for (name, mut subs) in merged_subscribers2.drain() {
      merged.entry(name).or_default().append(&mut subs);
    }
    let mut merged_targets = self.targets.into_inner().unwrap();
    merged_targets.append(&mut other.targets.into_inner().unwrap());
    Self {
      subscribers: Mutex::new(merged),
      targets: Mutex::new(merged_targets),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicUsize, Ordering};

  #[derive(Clone, Default)]
  struct Args(u32);

  struct Fallback;
  impl CallbackTarget<Args, u32> for Fallback {
    fn on(&self, name: &str, args: Args) -> Option<u32> {
      (name == "s1f1").then_some(args.0 + 1)
    }
  }

  #[test]
  fn direct_callback_wins_over_target() {
    let handler: CallbackHandler<Args, u32> = CallbackHandler::new();
    handler.bind("s1f1", |args: Args| args.0 * 10);
    handler.add_target(Arc::new(Fallback));
    assert_eq!(handler.fire("s1f1", Args(2)), Some(20));
  }

  #[test]
  fn target_fallback_used_when_unbound() {
    let handler: CallbackHandler<Args, u32> = CallbackHandler::new();
    handler.add_target(Arc::new(Fallback));
    assert_eq!(handler.fire("s1f1", Args(2)), Some(3));
    assert_eq!(handler.fire("s1f99", Args(2)), None);
  }

  #[test]
  fn unbind_clears_direct_callback() {
    let handler: CallbackHandler<Args, u32> = CallbackHandler::new();
    handler.bind("s1f1", |args: Args| args.0);
    handler.unbind("s1f1");
    assert!(handler.fire("s1f1", Args(5)).is_none());
  }

  #[test]
  fn event_producer_fires_subscribers_in_order_then_targets() {
    let producer: EventProducer<u32> = EventProducer::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let order_a = order.clone();
    let order_b = order.clone();
    producer.subscribe("ce100025", move |_| order_a.lock().unwrap().push(1));
    producer.subscribe("ce100025", move |_| order_b.lock().unwrap().push(2));

    struct Target(Arc<AtomicUsize>);
    impl EventTarget<u32> for Target {
      fn on_named_event(&self, _name: &str, _payload: &u32) {
        self.0.fetch_add(1, Ordering::SeqCst);
      }
    }
    let counter = Arc::new(AtomicUsize::new(0));
    producer.add_target(Arc::new(Target(counter.clone())));

    producer.fire("ce100025", &7);
    assert_eq!(*order.lock().unwrap(), vec![1, 2]);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
  }
}
