//! Widget theme tree and token keys

use aiwidget_color::ColorScheme;
use indexmap::IndexMap;
use serde::Serialize;

use crate::value::TokenValue;

/// Theme leaf keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ThemeToken {
    // Backgrounds
    BgChatBottom,
    BgMessageInput,
    BgIncomingMessage,
    BgOutgoingMessage,
    BgSuggestedReply,
    BgBottomBanner,
    BgLoadingScreen,
    BgCarouselItem,
    BgCarouselButton,
    BgCarouselButtonIcon,

    // Hover backgrounds
    HoverIncomingMessage,
    HoverOutgoingMessage,
    HoverSuggestedReply,
    HoverCarouselButton,

    // Text
    TextIncomingMessage,
    TextOutgoingMessage,
    TextErrorMessage,
    TextSentTime,
    TextSourceInfo,
    TextSuggestedReply,
    TextPoweredBy,
    TextLogo,
    TextCarouselItem,

    // Borders
    BorderChannelHeader,
    BorderCarouselItem,

    // Accent
    Accent,
}

impl ThemeToken {
    /// Every token, in serialization order
    pub fn all() -> &'static [ThemeToken] {
        use ThemeToken::*;
        const TOKENS: [ThemeToken; 26] = [
            BgChatBottom,
            BgMessageInput,
            BgIncomingMessage,
            BgOutgoingMessage,
            BgSuggestedReply,
            BgBottomBanner,
            BgLoadingScreen,
            HoverIncomingMessage,
            HoverOutgoingMessage,
            HoverSuggestedReply,
            HoverCarouselButton,
            BgCarouselItem,
            BgCarouselButton,
            BgCarouselButtonIcon,
            TextIncomingMessage,
            TextOutgoingMessage,
            TextErrorMessage,
            TextSentTime,
            TextSourceInfo,
            TextSuggestedReply,
            TextPoweredBy,
            TextLogo,
            TextCarouselItem,
            BorderChannelHeader,
            BorderCarouselItem,
            Accent,
        ];
        &TOKENS
    }

    /// Dotted path of the leaf in the serialized tree
    pub fn path(self) -> &'static str {
        match self {
            Self::BgChatBottom => "bgColor.chatBottom",
            Self::BgMessageInput => "bgColor.messageInput",
            Self::BgIncomingMessage => "bgColor.incomingMessage",
            Self::BgOutgoingMessage => "bgColor.outgoingMessage",
            Self::BgSuggestedReply => "bgColor.suggestedReply",
            Self::BgBottomBanner => "bgColor.bottomBanner",
            Self::BgLoadingScreen => "bgColor.loadingScreen",
            Self::BgCarouselItem => "bgColor.carouselItem",
            Self::BgCarouselButton => "bgColor.carouselButton",
            Self::BgCarouselButtonIcon => "bgColor.carouselButtonIcon",
            Self::HoverIncomingMessage => "bgColor.hover.incomingMessage",
            Self::HoverOutgoingMessage => "bgColor.hover.outgoingMessage",
            Self::HoverSuggestedReply => "bgColor.hover.suggestedReply",
            Self::HoverCarouselButton => "bgColor.hover.carouselButton",
            Self::TextIncomingMessage => "textColor.incomingMessage",
            Self::TextOutgoingMessage => "textColor.outgoingMessage",
            Self::TextErrorMessage => "textColor.errorMessage",
            Self::TextSentTime => "textColor.sentTime",
            Self::TextSourceInfo => "textColor.sourceInfo",
            Self::TextSuggestedReply => "textColor.suggestedReply",
            Self::TextPoweredBy => "textColor.bottomBanner.poweredBy",
            Self::TextLogo => "textColor.bottomBanner.logo",
            Self::TextCarouselItem => "textColor.carouselItem",
            Self::BorderChannelHeader => "borderColor.channelHeader",
            Self::BorderCarouselItem => "borderColor.carouselItem",
            Self::Accent => "accentColor",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|token| token.path() == path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverColors {
    pub incoming_message: TokenValue,
    pub outgoing_message: TokenValue,
    pub suggested_reply: TokenValue,
    pub carousel_button: TokenValue,
}

/// Surface colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundColors {
    pub chat_bottom: TokenValue,
    pub message_input: TokenValue,
    pub incoming_message: TokenValue,
    pub outgoing_message: TokenValue,
    pub suggested_reply: TokenValue,
    pub bottom_banner: TokenValue,
    pub loading_screen: TokenValue,
    pub hover: HoverColors,
    pub carousel_item: TokenValue,
    pub carousel_button: TokenValue,
    pub carousel_button_icon: TokenValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomBannerColors {
    pub powered_by: TokenValue,
    pub logo: TokenValue,
}

/// Text colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
    pub incoming_message: TokenValue,
    pub outgoing_message: TokenValue,
    pub error_message: TokenValue,
    pub sent_time: TokenValue,
    pub source_info: TokenValue,
    pub suggested_reply: TokenValue,
    pub bottom_banner: BottomBannerColors,
    pub carousel_item: TokenValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderColors {
    pub channel_header: TokenValue,
    pub carousel_item: TokenValue,
}

/// Complete theme tree for one appearance mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetTheme {
    #[serde(skip)]
    pub(crate) scheme: ColorScheme,
    pub bg_color: BackgroundColors,
    pub text_color: TextColors,
    pub border_color: BorderColors,
    pub accent_color: TokenValue,
}

impl WidgetTheme {
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Get a leaf by token key
    pub fn get(&self, token: ThemeToken) -> &TokenValue {
        let bg = &self.bg_color;
        let text = &self.text_color;
        match token {
            ThemeToken::BgChatBottom => &bg.chat_bottom,
            ThemeToken::BgMessageInput => &bg.message_input,
            ThemeToken::BgIncomingMessage => &bg.incoming_message,
            ThemeToken::BgOutgoingMessage => &bg.outgoing_message,
            ThemeToken::BgSuggestedReply => &bg.suggested_reply,
            ThemeToken::BgBottomBanner => &bg.bottom_banner,
            ThemeToken::BgLoadingScreen => &bg.loading_screen,
            ThemeToken::BgCarouselItem => &bg.carousel_item,
            ThemeToken::BgCarouselButton => &bg.carousel_button,
            ThemeToken::BgCarouselButtonIcon => &bg.carousel_button_icon,
            ThemeToken::HoverIncomingMessage => &bg.hover.incoming_message,
            ThemeToken::HoverOutgoingMessage => &bg.hover.outgoing_message,
            ThemeToken::HoverSuggestedReply => &bg.hover.suggested_reply,
            ThemeToken::HoverCarouselButton => &bg.hover.carousel_button,
            ThemeToken::TextIncomingMessage => &text.incoming_message,
            ThemeToken::TextOutgoingMessage => &text.outgoing_message,
            ThemeToken::TextErrorMessage => &text.error_message,
            ThemeToken::TextSentTime => &text.sent_time,
            ThemeToken::TextSourceInfo => &text.source_info,
            ThemeToken::TextSuggestedReply => &text.suggested_reply,
            ThemeToken::TextPoweredBy => &text.bottom_banner.powered_by,
            ThemeToken::TextLogo => &text.bottom_banner.logo,
            ThemeToken::TextCarouselItem => &text.carousel_item,
            ThemeToken::BorderChannelHeader => &self.border_color.channel_header,
            ThemeToken::BorderCarouselItem => &self.border_color.carousel_item,
            ThemeToken::Accent => &self.accent_color,
        }
    }

    /// Leaves as `path -> value`, in serialization order
    pub fn flatten(&self) -> IndexMap<&'static str, String> {
        ThemeToken::all()
            .iter()
            .map(|&token| (token.path(), self.get(token).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_paths_are_unique() {
        let paths: HashSet<&str> = ThemeToken::all().iter().map(|t| t.path()).collect();
        assert_eq!(paths.len(), ThemeToken::all().len());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ThemeToken::from_path("bgColor.hover.outgoingMessage"),
            Some(ThemeToken::HoverOutgoingMessage)
        );
        assert_eq!(ThemeToken::from_path("accentColor"), Some(ThemeToken::Accent));
        assert_eq!(ThemeToken::from_path("bgColor.hover"), None);
    }
}
