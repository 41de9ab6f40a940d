//! Path existence rules.
//!
//! Existence is asked of the context's [`Environment`](crate::core::Environment),
//! never of the filesystem directly.
//!
//! `file_exists` and `directory_exists` always fail with
//! [`AssuranceError::FileNotFound`] and [`AssuranceError::DirectoryNotFound`]
//! respectively, converted into the chain's error type. The chain's own error
//! kind is not consulted for them. The `*_does_not_exist` rules use the chain's
//! kind as usual.

use crate::core::{name_label, AssuranceContext, ValuedContext};
use crate::error::AssuranceError;
use std::borrow::Cow;
use std::path::Path;

/// Message for a missing file.
pub fn file_not_found_message(path: &Path, name: Option<&str>) -> String {
    format!("The{}file not found: '{}'.", name_label(name), path.display())
}

/// Message for a file that should not exist.
pub fn file_exists_message(path: &Path, name: Option<&str>) -> String {
    format!("The{}file exists: '{}'.", name_label(name), path.display())
}

/// Message for a missing directory.
pub fn directory_not_found_message(path: &Path, name: Option<&str>) -> String {
    format!(
        "The{}directory not found: '{}'.",
        name_label(name),
        path.display()
    )
}

/// Message for a directory that should not exist.
pub fn directory_exists_message(path: &Path, name: Option<&str>) -> String {
    format!("The{}directory exists: '{}'.", name_label(name), path.display())
}

impl<E, V: AsRef<Path>> ValuedContext<E, V> {
    /// Fail with `FileNotFound` unless the path names an existing file.
    pub fn file_exists(self) -> Result<Self, E>
    where
        E: From<AssuranceError>,
    {
        let missing = !self.environment().is_file(self.value().as_ref());
        self.assure_as(
            AssuranceError::FileNotFound,
            |_| missing,
            |path, name| file_not_found_message(path.as_ref(), name),
        )
    }

    /// Fail when the path names an existing file.
    pub fn file_does_not_exist(self) -> Result<Self, E> {
        let present = self.environment().is_file(self.value().as_ref());
        self.assure(
            |_| present,
            |path, name| file_exists_message(path.as_ref(), name),
        )
    }

    /// Fail with `DirectoryNotFound` unless the path names an existing directory.
    pub fn directory_exists(self) -> Result<Self, E>
    where
        E: From<AssuranceError>,
    {
        let missing = !self.environment().is_dir(self.value().as_ref());
        self.assure_as(
            AssuranceError::DirectoryNotFound,
            |_| missing,
            |path, name| directory_not_found_message(path.as_ref(), name),
        )
    }

    /// Fail when the path names an existing directory.
    pub fn directory_does_not_exist(self) -> Result<Self, E> {
        let present = self.environment().is_dir(self.value().as_ref());
        self.assure(
            |_| present,
            |path, name| directory_exists_message(path.as_ref(), name),
        )
    }
}

impl<E> AssuranceContext<E> {
    pub fn file_exists<V: AsRef<Path>>(
        self,
        value: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E>
    where
        E: From<AssuranceError>,
    {
        self.with_named_value(value, name).file_exists()
    }

    pub fn file_does_not_exist<V: AsRef<Path>>(
        self,
        value: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).file_does_not_exist()
    }

    pub fn directory_exists<V: AsRef<Path>>(
        self,
        value: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E>
    where
        E: From<AssuranceError>,
    {
        self.with_named_value(value, name).directory_exists()
    }

    pub fn directory_does_not_exist<V: AsRef<Path>>(
        self,
        value: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).directory_does_not_exist()
    }
}
