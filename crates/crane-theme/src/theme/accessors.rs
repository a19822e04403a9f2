//! Typed read accessors, one per registered token.

use super::ThemeResolver;
use crate::color::Color;
use crate::dimension::Dimension;
use crate::token::Token;

macro_rules! accessors {
    ($( $getter:ident -> $ret:ty { $( $name:ident => $token:ident, )* } )*) => {
        impl ThemeResolver {
            $( $(
                #[doc = concat!("The resolved [`Token::", stringify!($token), "`].")]
                pub fn $name(&self) -> $ret {
                    self.$getter(Token::$token)
                }
            )* )*
        }
    };
}

accessors! {
    color_of -> Color {
        primary_color => PrimaryColor,
        secondary_color => SecondaryColor,
        success_color => SuccessColor,
        warning_color => WarningColor,
        danger_color => DangerColor,
        none_color => NoneColor,
        background_color => BackgroundColor,
        app_background_color => AppBackgroundColor,
        surface_background_color => SurfaceBackgroundColor,
        text_color => TextColor,
        text_color_dark => TextColorDark,
        button_text_color => ButtonTextColor,
        button_text_color_dark => ButtonTextColorDark,
        icon_color => IconColor,
        icon_color_dark => IconColorDark,
        navigation_language_picker_color => NavigationLanguagePickerColor,
        app_bar_background_color => AppBarBackgroundColor,
        blockquote_background_color => BlockquoteBackgroundColor,
        blockquote_icon_color => BlockquoteIconColor,
        blockquote_text_color => BlockquoteTextColor,
        burger_color => BurgerColor,
        burger_hover_color => BurgerHoverColor,
        burger_color_dark => BurgerColorDark,
        call_to_action_background_color => CallToActionBackgroundColor,
        call_to_action_text_color => CallToActionTextColor,
        counter_bar_color => CounterBarColor,
        counter_background_color => CounterBackgroundColor,
        counter_text_color => CounterTextColor,
        dialog_background_color => DialogBackgroundColor,
        dialog_text_color => DialogTextColor,
        dialog_close_color => DialogCloseColor,
        drawer_background_color => DrawerBackgroundColor,
        expandable_background_color => ExpandableBackgroundColor,
        footer_background_color => FooterBackgroundColor,
        footer_text_color => FooterTextColor,
        footer_heading_color => FooterHeadingColor,
        form_background_color => FormBackgroundColor,
        form_link_text_color => FormLinkTextColor,
        form_text_color => FormTextColor,
        heading_color => HeadingColor,
        heading_color_dark => HeadingColorDark,
        icon_hover_color => IconHoverColor,
        insight_background_color => InsightBackgroundColor,
        insight_text_color => InsightTextColor,
        landing_section_arrow_color => LandingSectionArrowColor,
        landing_section_background_color => LandingSectionBackgroundColor,
        landing_section_title_color => LandingSectionTitleColor,
        link_color => LinkColor,
        link_secondary_color => LinkSecondaryColor,
        list_marker_color => ListMarkerColor,
        list_text_color => ListTextColor,
        navigation_icon_color => NavigationIconColor,
        navigation_icon_color_dark => NavigationIconColorDark,
        navigation_language_picker_hover_color => NavigationLanguagePickerHoverColor,
        navigation_language_picker_icon_color => NavigationLanguagePickerIconColor,
        navigation_menu_background_color => NavigationMenuBackgroundColor,
        ordered_list_marker_color => OrderedListMarkerColor,
        ordered_list_text_color => OrderedListTextColor,
        pullquote_background_color => PullquoteBackgroundColor,
        pullquote_text_color => PullquoteTextColor,
        scroll_bar_color => ScrollBarColor,
        scroll_bar_background_color => ScrollBarBackgroundColor,
        section_marker_background_color => SectionMarkerBackgroundColor,
        section_marker_number_color => SectionMarkerNumberColor,
        section_marker_text_color => SectionMarkerTextColor,
        section_marker_title_color => SectionMarkerTitleColor,
        share_button_background_color => ShareButtonBackgroundColor,
        share_button_background_hover_color => ShareButtonBackgroundHoverColor,
        share_button_text_color => ShareButtonTextColor,
        share_button_text_hover_color => ShareButtonTextHoverColor,
        unordered_list_marker_color => UnorderedListMarkerColor,
        unordered_list_text_color => UnorderedListTextColor,
    }

    optional_color_of -> Option<Color> {
        call_to_action_button_background_color => CallToActionButtonBackgroundColor,
        call_to_action_button_background_hover_color => CallToActionButtonBackgroundHoverColor,
        call_to_action_button_text_color => CallToActionButtonTextColor,
        call_to_action_button_text_hover_color => CallToActionButtonTextHoverColor,
        landing_section_title_background_color => LandingSectionTitleBackgroundColor,
    }

    dimension_of -> Dimension {
        medium_spacing => MediumSpacing,
        base_font_size => BaseFontSize,
        surface_border_radius => SurfaceBorderRadius,
        app_bar_height => AppBarHeight,
        base_tablet_font_size => BaseTabletFontSize,
        button_border_radius => ButtonBorderRadius,
        extra_large_spacing => ExtraLargeSpacing,
        large_spacing => LargeSpacing,
        small_spacing => SmallSpacing,
        extra_small_spacing => ExtraSmallSpacing,
    }

    number_of -> f64 {
        contrast_luminance_threshold => ContrastLuminanceThreshold,
        mobile_breakpoint => MobileBreakpoint,
        tablet_breakpoint => TabletBreakpoint,
        desktop_breakpoint => DesktopBreakpoint,
        section_marker_number_opacity => SectionMarkerNumberOpacity,
    }

    flag_of -> bool {
        uppercase_titles => UppercaseTitles,
        disable_elevation => DisableElevation,
    }

    string_of -> String {
        font_family => FontFamily,
        header_font_family => HeaderFontFamily,
        link_style => LinkStyle,
        title_transform => TitleTransform,
    }
}
