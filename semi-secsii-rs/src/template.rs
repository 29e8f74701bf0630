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

//! # BODY TEMPLATES
//!
//! The concrete message types in [messages][crate::messages] decode an
//! [Item] into a fixed Rust shape at the type level. This module provides the
//! complementary *data-level* description of a message body: a [Template]
//! tree that a [stream/function descriptor][crate::registry::FunctionDescriptor]
//! can carry alongside its typed accessor, for callers that want to validate
//! or introspect a body without committing to a specific message struct (for
//! example, a generic trace/dump tool, or a message whose body shape is only
//! known by stream/function at runtime).
//!
//! A [Template] is one of:
//! - a [Leaf][Template::Leaf], an item whose format must be one of a
//!   permitted set of [ItemKind]s (a *dynamic* leaf, per SEMI E5's allowance
//!   for host/equipment-defined variable types) and whose element count may
//!   be constrained;
//! - a [List][Template::List], an ordered sequence of child templates; or
//! - a [RepeatingGroup][Template::RepeatingGroup], a named, variable-length
//!   repetition of a single child template (e.g. the `DATA` list of S2F33).
//!
//! [Named][Template::path_table] leaves and groups compile to a stable
//! `name -> path` table so that a decoded [Item] can be navigated by name
//! rather than by runtime attribute probing.
//!
//! [Item]: crate::Item

use crate::Item;
use crate::format;
use std::collections::HashMap;

/// ## ITEM KIND
///
/// The format of an [Item], named rather than expressed as the raw format
/// byte, for use in a [Template]'s permitted-kinds set.
///
/// [Item]: crate::Item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
  List,
  Bin,
  Bool,
  Ascii,
  Jis8,
  Local,
  I1,
  I2,
  I4,
  I8,
  U1,
  U2,
  U4,
  U8,
  F4,
  F8,
}

impl ItemKind {
  /// The format byte (top six bits) this kind decodes from / encodes to.
  pub fn format_byte(self) -> u8 {
    match self {
      ItemKind::List  => format::LIST,
      ItemKind::Bin   => format::BIN,
      ItemKind::Bool  => format::BOOL,
      ItemKind::Ascii => format::ASCII,
      ItemKind::Jis8  => format::JIS8,
      ItemKind::Local => format::LOCAL,
      ItemKind::I1    => format::I1,
      ItemKind::I2    => format::I2,
      ItemKind::I4    => format::I4,
      ItemKind::I8    => format::I8,
      ItemKind::U1    => format::U1,
      ItemKind::U2    => format::U2,
      ItemKind::U4    => format::U4,
      ItemKind::U8    => format::U8,
      ItemKind::F4    => format::F4,
      ItemKind::F8    => format::F8,
    }
  }

  /// The [ItemKind] an already-decoded [Item] was produced from.
  ///
  /// [Item]: crate::Item
  pub fn of(item: &Item) -> Self {
    match item {
      Item::List(_)     => ItemKind::List,
      Item::Bin(_)      => ItemKind::Bin,
      Item::Bool(_)     => ItemKind::Bool,
      Item::Ascii(_)    => ItemKind::Ascii,
      Item::Jis8(_)     => ItemKind::Jis8,
      Item::Local(_, _) => ItemKind::Local,
      Item::I1(_)       => ItemKind::I1,
      Item::I2(_)       => ItemKind::I2,
      Item::I4(_)       => ItemKind::I4,
      Item::I8(_)       => ItemKind::I8,
      Item::U1(_)       => ItemKind::U1,
      Item::U2(_)       => ItemKind::U2,
      Item::U4(_)       => ItemKind::U4,
      Item::U8(_)       => ItemKind::U8,
      Item::F4(_)       => ItemKind::F4,
      Item::F8(_)       => ItemKind::F8,
    }
  }

  fn element_count(self, item: &Item) -> Option<usize> {
    match (self, item) {
      (ItemKind::List,  Item::List(v))     => Some(v.len()),
      (ItemKind::Bin,   Item::Bin(v))      => Some(v.len()),
      (ItemKind::Bool,  Item::Bool(v))     => Some(v.len()),
      (ItemKind::Ascii, Item::Ascii(v))    => Some(v.len()),
      (ItemKind::Jis8,  Item::Jis8(v))     => Some(v.chars().count()),
      (ItemKind::Local, Item::Local(_, v)) => Some(v.len()),
      (ItemKind::I1,    Item::I1(v))       => Some(v.len()),
      (ItemKind::I2,    Item::I2(v))       => Some(v.len()),
      (ItemKind::I4,    Item::I4(v))       => Some(v.len()),
      (ItemKind::I8,    Item::I8(v))       => Some(v.len()),
      (ItemKind::U1,    Item::U1(v))       => Some(v.len()),
      (ItemKind::U2,    Item::U2(v))       => Some(v.len()),
      (ItemKind::U4,    Item::U4(v))       => Some(v.len()),
      (ItemKind::U8,    Item::U8(v))       => Some(v.len()),
      (ItemKind::F4,    Item::F4(v))       => Some(v.len()),
      (ItemKind::F8,    Item::F8(v))       => Some(v.len()),
      _ => None,
    }
  }
}

/// ## TEMPLATE VALIDATION ERROR
#[derive(Clone, Debug, PartialEq)]
pub enum TemplateError {
  /// The item's format was not among the [Leaf][Template::Leaf]'s permitted
  /// [ItemKind]s.
  TypeRefused { expected: Vec<ItemKind>, found: ItemKind },
  /// A `__count__` constraint on a [Leaf][Template::Leaf] or
  /// [RepeatingGroup][Template::RepeatingGroup] was not met.
  CountMismatch { expected: usize, found: usize },
  /// A [List][Template::List]'s arity did not match the template.
  ArityMismatch { expected: usize, found: usize },
  /// An item expected to be a [List][Template::List] or
  /// [RepeatingGroup][Template::RepeatingGroup] was some other kind.
  NotAList { found: ItemKind },
}

/// ## BODY TEMPLATE
///
/// See the [module documentation][self] for the grammar.
#[derive(Clone, Debug)]
pub enum Template {
  /// A single item, constrained to one of a set of permitted [ItemKind]s and,
  /// optionally, an exact element count (`__count__`; `None` means
  /// unconstrained).
  Leaf {
    name: Option<&'static str>,
    kinds: Vec<ItemKind>,
    count: Option<usize>,
  },
  /// An ordered, fixed-arity SECS list.
  List {
    name: Option<&'static str>,
    children: Vec<Template>,
  },
  /// A named, variable-length repetition of one child template, as in
  /// `[["PARAMS", LOC, QUA, MID]]`.
  RepeatingGroup {
    name: &'static str,
    child: Box<Template>,
    count: Option<usize>,
  },
}

impl Template {
  pub fn leaf(kinds: &[ItemKind]) -> Self {
    Template::Leaf { name: None, kinds: kinds.to_vec(), count: None }
  }

  pub fn named(mut self, name: &'static str) -> Self {
    match &mut self {
      Template::Leaf { name: n, .. } => *n = Some(name),
      Template::List { name: n, .. } => *n = Some(name),
      Template::RepeatingGroup { .. } => {
        // Repeating groups are already named at construction.
      }
    }
    self
  }

  /// Validate `item` against this template, recursively.
  pub fn validate(&self, item: &Item) -> Result<(), TemplateError> {
    match self {
      Template::Leaf { kinds, count, .. } => {
        let found = ItemKind::of(item);
        if !kinds.contains(&found) {
          return Err(TemplateError::TypeRefused { expected: kinds.clone(), found });
        }
        if let Some(expected) = count {
          let actual = found.element_count(item).unwrap_or(0);
          if actual != *expected {
            return Err(TemplateError::CountMismatch { expected: *expected, found: actual });
          }
        }
        Ok(())
      }
      Template::List { children, .. } => {
        let Item::List(items) = item else {
          return Err(TemplateError::NotAList { found: ItemKind::of(item) });
        };
        if items.len() != children.len() {
          return Err(TemplateError::ArityMismatch { expected: children.len(), found: items.len() });
        }
        for (child, value) in children.iter().zip(items.iter()) {
          child.validate(value)?;
        }
        Ok(())
      }
      Template::RepeatingGroup { child, count, .. } => {
        let Item::List(items) = item else {
          return Err(TemplateError::NotAList { found: ItemKind::of(item) });
        };
        if let Some(expected) = count {
          if items.len() != *expected {
            return Err(TemplateError::CountMismatch { expected: *expected, found: items.len() });
          }
        }
        for value in items {
          child.validate(value)?;
        }
        Ok(())
      }
    }
  }

  /// Compile the template's named positions into a `name -> path` table,
  /// where a path is the sequence of list indices from the root to that
  /// position. Used to synthesize typed accessors without runtime attribute
  /// probing.
  pub fn path_table(&self) -> HashMap<&'static str, Vec<usize>> {
    let mut table = HashMap::new();
    self.collect_paths(&mut vec![], &mut table);
    table
  }

  fn collect_paths(&self, path: &mut Vec<usize>, table: &mut HashMap<&'static str, Vec<usize>>) {
    match self {
      Template::Leaf { name, .. } => {
        if let Some(name) = name {
          table.insert(name, path.clone());
        }
      }
      Template::List { name, children } => {
        if let Some(name) = name {
          table.insert(name, path.clone());
        }
        for (i, child) in children.iter().enumerate() {
          path.push(i);
          child.collect_paths(path, table);
          path.pop();
        }
      }
      Template::RepeatingGroup { name, child, .. } => {
        table.insert(name, path.clone());
        path.push(0);
        child.collect_paths(path, table);
        path.pop();
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_disallowed_kind() {
    let template = Template::leaf(&[ItemKind::U4, ItemKind::Ascii]);
    let err = template.validate(&Item::bool(true)).unwrap_err();
    assert!(matches!(err, TemplateError::TypeRefused { .. }));
  }

  #[test]
  fn accepts_allowed_kind_in_set() {
    let template = Template::leaf(&[ItemKind::U4, ItemKind::Ascii]);
    assert!(template.validate(&Item::u4(7)).is_ok());
    assert!(template.validate(&Item::Ascii(vec![])).is_ok());
  }

  #[test]
  fn enforces_count() {
    let template = Template::Leaf { name: None, kinds: vec![ItemKind::U4], count: Some(2) };
    assert!(template.validate(&Item::U4(vec![1])).is_err());
    assert!(template.validate(&Item::U4(vec![1, 2])).is_ok());
  }

  #[test]
  fn named_repeating_group_path() {
    let template = Template::RepeatingGroup {
      name: "PARAMS",
      child: Box::new(Template::List {
        name: None,
        children: vec![
          Template::leaf(&[ItemKind::Ascii]).named("CPNAME"),
          Template::leaf(&[ItemKind::Ascii]).named("CPVAL"),
        ],
      }),
      count: None,
    };
    let table = template.path_table();
    assert_eq!(table.get("PARAMS"), Some(&vec![]));
    assert_eq!(table.get("CPNAME"), Some(&vec![0usize, 0]));
    assert_eq!(table.get("CPVAL"), Some(&vec![0usize, 1]));
  }
}
