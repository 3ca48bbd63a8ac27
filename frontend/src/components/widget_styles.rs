use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide rules the interactive widgets rely on: trail pop, cursor fade,
/// email label swap, marquee track and helix keyframes.
#[function_component(WidgetStyles)]
pub fn widget_styles() -> Html {
    html! {
        <Global css={css!(r#"
            .cursor-animation-flame,
            .cursor-animation-eye {
                position: fixed;
                top: 0;
                left: 0;
                pointer-events: none;
                display: none;
                z-index: 100;
            }
            .cursor-animation-flame.active,
            .cursor-animation-eye.active {
                animation: cursor-fade-in 0.2s ease-out forwards;
            }
            .cursor-animation-flame.leaving,
            .cursor-animation-eye.leaving {
                animation: cursor-fade-out 0.25s ease-in forwards;
            }
            @keyframes cursor-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            @keyframes cursor-fade-out {
                from { opacity: 1; }
                to { opacity: 0; }
            }

            .content-email-button .text-wrapper {
                position: relative;
                display: inline-block;
                overflow: hidden;
                transition: width 0.3s ease;
            }
            .content-email-button .text {
                position: absolute;
                left: 0;
                white-space: nowrap;
                transform: translateY(100%);
                opacity: 0;
                transition: transform 0.3s ease, opacity 0.3s ease;
            }
            .content-email-button .text.active {
                position: relative;
                transform: translateY(0);
                opacity: 1;
            }
            .content-email-button .text.exit {
                transform: translateY(-100%);
                opacity: 0;
            }

            .clients-testimonials-container {
                position: relative;
                transition: height 0.3s ease;
            }
            .testimonial-item {
                position: absolute;
                inset: 0 auto auto 0;
                opacity: 0;
                transition: opacity 0.6s ease;
            }
            .testimonial-item.testimonial-state-active {
                opacity: 1;
            }

            .answer-item {
                overflow: hidden;
            }

            .stickers-container {
                position: relative;
                min-height: 320px;
                overflow: hidden;
            }
            .trail-image {
                position: absolute;
                width: 96px;
                pointer-events: none;
                opacity: 0;
                transform: translate(-50%, -50%) scale(0);
            }
            .trail-image.animate {
                animation: trail-pop var(--trail-duration, 800ms) ease-out forwards;
            }
            @keyframes trail-pop {
                0% { opacity: 1; transform: translate(-50%, -50%) scale(0); }
                20% { opacity: 1; transform: translate(-50%, -50%) scale(1); }
                100% { opacity: 0; transform: translate(-50%, -50%) scale(0.9); }
            }

            .header-marquee-container {
                overflow: hidden;
            }
            .header-marquee-track {
                display: flex;
                opacity: 0;
                will-change: transform;
            }
            .header-marquee-item {
                flex: none;
                margin: 0 6px;
            }

            #animation-helix {
                display: flex;
                justify-content: center;
                height: 120px;
            }
            .helix-container {
                position: relative;
                width: 12px;
                height: 100%;
            }
            .helix-container .vertical-line {
                position: absolute;
                left: 50%;
                top: 10%;
                height: 80%;
                width: 1px;
                background: currentColor;
            }
            .helix-container .circle {
                position: absolute;
                left: 50%;
                width: 8px;
                height: 8px;
                margin-left: -4px;
                border-radius: 50%;
                background: currentColor;
            }
            @keyframes helix-scaleLine {
                from { transform: scaleY(1); }
                to { transform: scaleY(0.2); }
            }
            @keyframes helix-moveTop {
                0% { top: 10%; }
                50% { top: 90%; }
                100% { top: 10%; }
            }
            @keyframes helix-moveBottom {
                0% { top: 90%; }
                50% { top: 10%; }
                100% { top: 90%; }
            }
        "#)} />
    }
}
