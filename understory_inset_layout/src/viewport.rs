// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container the layout flows into.

use kurbo::Insets;

/// Errors raised while describing a [`Viewport`].
///
/// These are setup mistakes in the host integration; a layout pass itself
/// never fails.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ViewportError {
    /// The container width is NaN, infinite or negative.
    #[error("viewport width must be finite and non-negative, got {0}")]
    InvalidWidth(f64),
    /// A content inset is NaN, infinite or negative.
    #[error("content insets must be finite and non-negative, got {0:?}")]
    InvalidInsets(Insets),
    /// The horizontal content insets leave no room for content.
    #[error("horizontal content insets ({horizontal}) exceed the viewport width ({width})")]
    InsetsExceedWidth {
        /// Sum of the left and right content insets.
        horizontal: f64,
        /// The container width.
        width: f64,
    },
}

/// Width of the scrolling container and the content insets applied inside it.
///
/// Items flow within the *content width*: the container width minus the left
/// and right content insets. Vertical content insets are carried for hosts but
/// do not move any frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    content_insets: Insets,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            content_insets: Insets::ZERO,
        }
    }
}

impl Viewport {
    /// Describe a container of `width` with the given content insets.
    ///
    /// ```rust
    /// use kurbo::Insets;
    /// use understory_inset_layout::Viewport;
    ///
    /// let viewport = Viewport::new(390.0, Insets::new(8.0, 0.0, 8.0, 0.0)).unwrap();
    /// assert_eq!(viewport.content_width(), 374.0);
    /// assert!(Viewport::new(10.0, Insets::uniform_xy(6.0, 0.0)).is_err());
    /// ```
    pub fn new(width: f64, content_insets: Insets) -> Result<Self, ViewportError> {
        if !width.is_finite() || width < 0.0 {
            return Err(ViewportError::InvalidWidth(width));
        }
        let edges = [
            content_insets.x0,
            content_insets.y0,
            content_insets.x1,
            content_insets.y1,
        ];
        if edges.iter().any(|edge| !edge.is_finite() || *edge < 0.0) {
            return Err(ViewportError::InvalidInsets(content_insets));
        }
        let horizontal = content_insets.x0 + content_insets.x1;
        if horizontal > width {
            return Err(ViewportError::InsetsExceedWidth { horizontal, width });
        }
        Ok(Self {
            width,
            content_insets,
        })
    }

    /// Describe a container of `width` without content insets.
    pub fn from_width(width: f64) -> Result<Self, ViewportError> {
        Self::new(width, Insets::ZERO)
    }

    /// Container width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Content insets of the container.
    #[must_use]
    pub const fn content_insets(&self) -> Insets {
        self.content_insets
    }

    /// Width available to items: container width minus horizontal content insets.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.width - self.content_insets.x0 - self.content_insets.x1
    }
}
