// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual alerts.
//!
//! Toasts appear as small cards with severity-colored accents, an optional
//! close button, action buttons and a progress bar for the countdown.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::Message;
use crate::alert::{AlertId, ClickTarget, Position, Severity};
use crate::controller;
use crate::registry::Icon;
use crate::surface::{Content, ContainerStyle, Handle, RenderSpec};
use iced::widget::{
    button, container, image, mouse_area, progress_bar, text, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Background, Color, Element, Length, Theme, Vector};

/// Render state of one toast, as last described by the controller.
#[derive(Debug, Clone)]
pub struct ToastState {
    pub(crate) handle: Handle,
    pub(crate) id: AlertId,
    pub(crate) text: String,
    pub(crate) icon: Option<Icon>,
    pub(crate) severity: Severity,
    pub(crate) close_button: bool,
    pub(crate) buttons: Vec<String>,
    /// Remaining countdown fraction; `None` hides the bar.
    pub(crate) progress: Option<f32>,
    pub(crate) leaving: bool,
    pub(crate) fading: bool,
    pub(crate) rtl: bool,
    pub(crate) draggable: bool,
    pub(crate) offset: Vector,
    pub(crate) font_size: Option<f32>,
}

impl ToastState {
    pub(crate) fn new(handle: Handle, spec: &RenderSpec<'_>) -> Self {
        let text = match spec.content {
            Content::Text(text) => text.to_string(),
            Content::Markup(markup) => strip_tags(markup),
        };
        Self {
            handle,
            id: spec.id,
            text,
            icon: spec.icon.clone(),
            severity: spec.options.severity.clone(),
            close_button: spec.options.close_button,
            buttons: spec
                .options
                .buttons
                .iter()
                .map(|button| button.text.clone())
                .collect(),
            progress: (spec.options.progress_bar && spec.options.auto_dismisses()).then_some(1.0),
            leaving: false,
            fading: false,
            rtl: spec.options.rtl,
            draggable: spec.options.draggable,
            offset: Vector::ZERO,
            font_size: spec.options.font_size,
        }
    }

    pub fn id(&self) -> AlertId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    fn alpha(&self) -> f32 {
        if self.fading {
            opacity::FADING
        } else {
            opacity::OPAQUE
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view<'a>(toast: &'a ToastState, style: &'a ContainerStyle) -> Element<'a, Message> {
        let id = toast.id;
        let accent = style.palette.accent(&toast.severity);
        let alpha = toast.alpha();
        let dark = style.dark;
        let font_size = toast
            .font_size
            .or(style.font_size)
            .unwrap_or(typography::BODY);

        let message_widget = Text::new(toast.text.as_str())
            .size(font_size)
            .align_x(if toast.rtl {
                alignment::Horizontal::Right
            } else {
                alignment::Horizontal::Left
            })
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..text_color(dark)
                }),
            });

        let mut items: Vec<Element<'a, Message>> = Vec::new();
        if let Some(icon) = Self::icon(toast.icon.as_ref()) {
            items.push(Container::new(icon).padding(spacing::XXS).into());
        }
        items.push(
            Container::new(message_widget)
                .width(Length::Fill)
                .into(),
        );
        if toast.close_button {
            items.push(
                button(text("✕").size(sizing::ICON_SM))
                    .on_press_maybe((!toast.leaving).then_some(Message::Alert(
                        controller::Message::Click(id, ClickTarget::CloseButton),
                    )))
                    .padding(spacing::XXS)
                    .style(move |theme: &Theme, status| dismiss_button_style(theme, status, dark))
                    .into(),
            );
        }
        if toast.rtl {
            items.reverse();
        }

        // Layout: [icon] [message] [close], mirrored for rtl
        let header = Row::with_children(items)
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        let mut body = Column::new().spacing(spacing::XS).push(header);

        if !toast.buttons.is_empty() {
            let mut actions: Vec<Element<'a, Message>> = toast
                .buttons
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    button(text(label.as_str()).size(typography::BODY_SM))
                        .on_press(Message::Alert(controller::Message::Click(
                            id,
                            ClickTarget::Button(index),
                        )))
                        .padding([spacing::XXS, spacing::XS])
                        .style(move |_theme: &Theme, status| action_button_style(accent, status))
                        .into()
                })
                .collect();
            if toast.rtl {
                actions.reverse();
            }
            body = body.push(Row::with_children(actions).spacing(spacing::XS));
        }

        if let Some(fraction) = toast.progress {
            body = body.push(
                progress_bar(0.0..=1.0, fraction)
                    .style(move |_theme: &Theme| progress_bar_style(accent, dark)),
            );
        }

        // Toast container with accent border
        let card = Container::new(body)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(dark, accent, alpha));

        let interactive = mouse_area(card)
            .on_enter(Message::Alert(controller::Message::HoverEnter(id)))
            .on_exit(Message::Alert(controller::Message::HoverLeave(id)))
            .on_release(Message::Alert(controller::Message::Click(
                id,
                ClickTarget::Body,
            )));
        let interactive = if toast.draggable {
            interactive.on_press(Message::DragStarted(id))
        } else {
            interactive
        };

        // Drag offset is applied as padding on the leading edges
        Container::new(interactive)
            .padding(iced::Padding {
                top: toast.offset.y.max(0.0),
                bottom: (-toast.offset.y).max(0.0),
                left: toast.offset.x.max(0.0),
                right: (-toast.offset.x).max(0.0),
            })
            .into()
    }

    /// Renders the alert layer: the optional backdrop and the toast stack.
    ///
    /// Toasts are stacked vertically in the container's corner.
    pub fn view_overlay<'a>(
        toasts: &'a [ToastState],
        style: &'a ContainerStyle,
        backdrop: Option<Color>,
    ) -> Element<'a, Message> {
        let mut layer = Stack::new();

        if let Some(color) = backdrop {
            let dimmed = Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                });
            layer = layer.push(
                mouse_area(dimmed).on_press(Message::Alert(controller::Message::OverlayClicked)),
            );
        }

        if !toasts.is_empty() {
            let (align_x, align_y) = alignment_for(style.position);
            let toast_column = Column::with_children(toasts.iter().map(|t| Self::view(t, style)))
                .spacing(spacing::XS)
                .align_x(align_x);

            layer = layer.push(
                Container::new(toast_column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(align_x)
                    .align_y(align_y)
                    .padding(spacing::MD),
            );
        }

        layer.into()
    }

    fn icon<'a>(icon: Option<&Icon>) -> Option<Element<'a, Message>> {
        match icon? {
            Icon::Glyph(glyph) => Some(text(glyph.clone()).size(sizing::ICON_MD).into()),
            Icon::Image(source) if source.starts_with('/') => Some(
                image(image::Handle::from_path(source))
                    .width(sizing::ICON_MD)
                    .height(sizing::ICON_MD)
                    .into(),
            ),
            // Remote images are not fetched
            Icon::Image(_) => None,
        }
    }
}

/// Maps a container position to the toast stack alignment.
pub(crate) fn alignment_for(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Drops markup tags, keeping the text between them.
pub(crate) fn strip_tags(markup: &str) -> String {
    let mut plain = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => plain.push(ch),
            _ => {}
        }
    }
    plain
}

fn text_color(dark: bool) -> Color {
    if dark {
        palette::WHITE
    } else {
        palette::GRAY_900
    }
}

/// Style function for the toast container.
fn toast_container_style(dark: bool, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = if dark {
        palette::GRAY_900
    } else {
        palette::WHITE
    };

    container::Style {
        background: Some(Background::Color(Color { a: alpha, ..bg_color })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(text_color(dark)),
        ..Default::default()
    }
}

/// Style function for the close button.
fn dismiss_button_style(_theme: &Theme, status: button::Status, dark: bool) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: text_color(dark),
        border: iced::Border::default(),
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text_color
            },
            ..base
        },
    }
}

/// Style function for action buttons.
fn action_button_style(accent: Color, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => accent,
        button::Status::Active | button::Status::Disabled => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        },
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette::GRAY_900,
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn progress_bar_style(accent: Color, dark: bool) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(if dark {
            palette::GRAY_700
        } else {
            palette::GRAY_100
        }),
        bar: Background::Color(accent),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}
