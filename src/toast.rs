// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents stacked in a window corner.

use crate::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::manager::{Manager, Message};
use crate::notification::Notification;
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use serde::{Deserialize, Serialize};

/// Window corner the toast overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Horizontal alignment of the overlay within the window.
    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Corner::TopRight | Corner::BottomRight => alignment::Horizontal::Right,
            Corner::TopLeft | Corner::BottomLeft => alignment::Horizontal::Left,
        }
    }

    /// Vertical alignment of the overlay within the window.
    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        match self {
            Corner::TopRight | Corner::TopLeft => alignment::Vertical::Top,
            Corner::BottomRight | Corner::BottomLeft => alignment::Vertical::Bottom,
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let accent_color = notification.severity().color();

        // Severity glyph in the accent color
        let glyph_widget = Text::new(notification.severity().glyph())
            .size(sizing::GLYPH)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        // Message text
        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        // Layout: [glyph] [message]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        // Toast card with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Stacks toasts vertically, oldest on top, anchored to the given corner.
    pub fn view_overlay(manager: &Manager, corner: Corner) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> =
            manager.visible().map(Toast::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(corner.horizontal());

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(corner.horizontal())
                .align_y(corner.vertical())
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Style function for the toast card container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
