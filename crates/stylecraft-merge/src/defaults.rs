//! Built-in property-group rules.
//!
//! The table is deliberately conservative: a utility family is listed only when
//! every value it can take sets the same CSS property (or the cases can tell
//! the properties apart from the value). Anything not listed stays
//! property-less and passes through the merger untouched.

use crate::table::{GroupRule, ValueKind};

/// Stems where every value sets the same property.
const SINGLE: &[(&str, &str)] = &[
    // sizing
    ("h", "height"),
    ("w", "width"),
    ("min-h", "min-height"),
    ("min-w", "min-width"),
    ("max-h", "max-height"),
    ("max-w", "max-width"),
    // padding
    ("p", "padding"),
    ("px", "padding-x"),
    ("py", "padding-y"),
    ("pt", "padding-top"),
    ("pr", "padding-right"),
    ("pb", "padding-bottom"),
    ("pl", "padding-left"),
    ("ps", "padding-start"),
    ("pe", "padding-end"),
    // margin
    ("m", "margin"),
    ("mx", "margin-x"),
    ("my", "margin-y"),
    ("mt", "margin-top"),
    ("mr", "margin-right"),
    ("mb", "margin-bottom"),
    ("ml", "margin-left"),
    ("ms", "margin-start"),
    ("me", "margin-end"),
    // gaps
    ("gap", "gap"),
    ("gap-x", "column-gap"),
    ("gap-y", "row-gap"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("space-x-reverse", "space-x-reverse"),
    ("space-y-reverse", "space-y-reverse"),
    // placement
    ("inset", "inset"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset-ring", "inset-ring"),
    ("inset-shadow", "inset-shadow"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("start", "inset-inline-start"),
    ("end", "inset-inline-end"),
    ("z", "z-index"),
    // flex and grid
    ("basis", "flex-basis"),
    ("order", "order"),
    ("grid-cols", "grid-template-columns"),
    ("grid-rows", "grid-template-rows"),
    ("col", "grid-column"),
    ("col-span", "grid-column-span"),
    ("col-start", "grid-column-start"),
    ("col-end", "grid-column-end"),
    ("row", "grid-row"),
    ("row-span", "grid-row-span"),
    ("row-start", "grid-row-start"),
    ("row-end", "grid-row-end"),
    ("items", "align-items"),
    ("self", "align-self"),
    ("justify", "justify-content"),
    ("justify-items", "justify-items"),
    ("justify-self", "justify-self"),
    ("place-items", "place-items"),
    ("place-content", "place-content"),
    ("place-self", "place-self"),
    // overflow
    ("overflow", "overflow"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    // corners
    ("rounded", "border-radius"),
    ("rounded-t", "border-radius-top"),
    ("rounded-r", "border-radius-right"),
    ("rounded-b", "border-radius-bottom"),
    ("rounded-l", "border-radius-left"),
    ("rounded-s", "border-radius-start"),
    ("rounded-e", "border-radius-end"),
    ("rounded-tl", "border-radius-top-left"),
    ("rounded-tr", "border-radius-top-right"),
    ("rounded-br", "border-radius-bottom-right"),
    ("rounded-bl", "border-radius-bottom-left"),
    ("rounded-ss", "border-radius-start-start"),
    ("rounded-se", "border-radius-start-end"),
    ("rounded-es", "border-radius-end-start"),
    ("rounded-ee", "border-radius-end-end"),
    // colour opacity (v3)
    ("bg-opacity", "background-opacity"),
    ("text-opacity", "text-opacity"),
    ("border-opacity", "border-opacity"),
    ("ring-opacity", "ring-opacity"),
    // background layers
    ("bg-gradient-to", "background-image"),
    ("bg-clip", "background-clip"),
    ("bg-origin", "background-origin"),
    ("border-spacing", "border-spacing"),
    // typography
    ("leading", "line-height"),
    ("tracking", "letter-spacing"),
    ("whitespace", "white-space"),
    ("underline-offset", "text-underline-offset"),
    // effects and interaction
    ("opacity", "opacity"),
    ("cursor", "cursor"),
    ("pointer-events", "pointer-events"),
    ("select", "user-select"),
    ("outline-offset", "outline-offset"),
    ("aspect", "aspect-ratio"),
    // transitions and transforms
    ("duration", "transition-duration"),
    ("ease", "transition-timing-function"),
    ("delay", "transition-delay"),
    ("animate", "animation"),
    ("scale", "scale"),
    ("scale-x", "scale-x"),
    ("scale-y", "scale-y"),
    ("rotate", "rotate"),
    ("translate-x", "translate-x"),
    ("translate-y", "translate-y"),
    ("origin", "transform-origin"),
];

/// Stems that are complete utilities on their own.
const BARE: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("inline-flex", "display"),
    ("inline-grid", "display"),
    ("hidden", "display"),
    ("contents", "display"),
    ("table", "display"),
    ("flow-root", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("sr-only", "screen-reader"),
    ("not-sr-only", "screen-reader"),
    ("underline", "text-decoration-line"),
    ("overline", "text-decoration-line"),
    ("line-through", "text-decoration-line"),
    ("no-underline", "text-decoration-line"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const OUTLINE_STYLES: &[&str] = &["none", "solid", "dashed", "dotted", "double"];
const BORDER_SIDES: &[(&str, &str)] = &[
    ("border-t", "top"),
    ("border-r", "right"),
    ("border-b", "bottom"),
    ("border-l", "left"),
    ("border-x", "x"),
    ("border-y", "y"),
    ("border-s", "start"),
    ("border-e", "end"),
];

/// Broader groups and the narrower groups a later token of theirs overrides.
///
/// `size` shares the height group and clears width on its own rule, since a
/// plain `h-*` must not.
const CONFLICTS: &[(&str, &[&str])] = &[
    (
        "padding",
        &[
            "padding-x",
            "padding-y",
            "padding-top",
            "padding-right",
            "padding-bottom",
            "padding-left",
            "padding-start",
            "padding-end",
        ],
    ),
    ("padding-x", &["padding-right", "padding-left"]),
    ("padding-y", &["padding-top", "padding-bottom"]),
    (
        "margin",
        &[
            "margin-x",
            "margin-y",
            "margin-top",
            "margin-right",
            "margin-bottom",
            "margin-left",
            "margin-start",
            "margin-end",
        ],
    ),
    ("margin-x", &["margin-right", "margin-left"]),
    ("margin-y", &["margin-top", "margin-bottom"]),
    ("gap", &["column-gap", "row-gap"]),
    (
        "inset",
        &[
            "inset-x",
            "inset-y",
            "top",
            "right",
            "bottom",
            "left",
            "inset-inline-start",
            "inset-inline-end",
        ],
    ),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    ("scale", &["scale-x", "scale-y"]),
    (
        "border-radius",
        &[
            "border-radius-top",
            "border-radius-right",
            "border-radius-bottom",
            "border-radius-left",
            "border-radius-start",
            "border-radius-end",
            "border-radius-top-left",
            "border-radius-top-right",
            "border-radius-bottom-right",
            "border-radius-bottom-left",
            "border-radius-start-start",
            "border-radius-start-end",
            "border-radius-end-start",
            "border-radius-end-end",
        ],
    ),
    (
        "border-radius-top",
        &["border-radius-top-left", "border-radius-top-right"],
    ),
    (
        "border-radius-right",
        &["border-radius-top-right", "border-radius-bottom-right"],
    ),
    (
        "border-radius-bottom",
        &["border-radius-bottom-right", "border-radius-bottom-left"],
    ),
    (
        "border-radius-left",
        &["border-radius-top-left", "border-radius-bottom-left"],
    ),
    (
        "border-radius-start",
        &["border-radius-start-start", "border-radius-end-start"],
    ),
    (
        "border-radius-end",
        &["border-radius-start-end", "border-radius-end-end"],
    ),
    (
        "border-width",
        &[
            "border-top-width",
            "border-right-width",
            "border-bottom-width",
            "border-left-width",
            "border-x-width",
            "border-y-width",
            "border-start-width",
            "border-end-width",
        ],
    ),
    ("border-x-width", &["border-right-width", "border-left-width"]),
    ("border-y-width", &["border-top-width", "border-bottom-width"]),
    (
        "border-color",
        &[
            "border-top-color",
            "border-right-color",
            "border-bottom-color",
            "border-left-color",
            "border-x-color",
            "border-y-color",
            "border-start-color",
            "border-end-color",
        ],
    ),
    ("border-x-color", &["border-right-color", "border-left-color"]),
    ("border-y-color", &["border-top-color", "border-bottom-color"]),
];

/// Width-style cases shared by `border`, `ring` and `outline` families.
fn width_cases(rule: GroupRule, group: &str) -> GroupRule {
    rule.when(ValueKind::Numeric, group)
        .when(ValueKind::Length, group)
}

/// Returns every built-in rule.
pub(crate) fn builtin_rules() -> Vec<GroupRule> {
    let mut rules: Vec<GroupRule> = SINGLE
        .iter()
        .map(|(stem, group)| GroupRule::single(*stem, *group))
        .collect();

    rules.push(GroupRule::single("size", "height").conflicts(&["width"]));

    rules.extend(
        BARE.iter()
            .map(|(stem, group)| GroupRule::new(*stem).when(ValueKind::Bare, *group)),
    );

    rules.push(
        GroupRule::new("flex")
            .when(ValueKind::Bare, "display")
            .keywords(&["row", "row-reverse", "col", "col-reverse"], "flex-direction")
            .keywords(&["wrap", "wrap-reverse", "nowrap"], "flex-wrap")
            .keywords(&["1", "auto", "initial", "none"], "flex")
            .when(ValueKind::Arbitrary, "flex"),
    );
    rules.push(
        GroupRule::new("grid")
            .when(ValueKind::Bare, "display")
            .keywords(&["flow-row", "flow-col", "flow-dense"], "grid-auto-flow"),
    );
    rules.push(GroupRule::new("content").keywords(
        &[
            "normal", "center", "start", "end", "between", "around", "evenly", "baseline",
            "stretch",
        ],
        "align-content",
    ));
    rules.push(
        GroupRule::new("shrink")
            .when(ValueKind::Bare, "flex-shrink")
            .when(ValueKind::Numeric, "flex-shrink"),
    );
    rules.push(
        GroupRule::new("grow")
            .when(ValueKind::Bare, "flex-grow")
            .when(ValueKind::Numeric, "flex-grow"),
    );

    rules.push(
        GroupRule::new("text")
            .keywords(FONT_SIZES, "font-size")
            .when(ValueKind::Length, "font-size")
            .keywords(
                &["left", "center", "right", "justify", "start", "end"],
                "text-align",
            )
            .keywords(&["ellipsis", "clip"], "text-overflow")
            .keywords(&["wrap", "nowrap", "balance", "pretty"], "text-wrap")
            .otherwise("text-color"),
    );
    rules.push(
        GroupRule::new("font")
            .keywords(FONT_WEIGHTS, "font-weight")
            .keywords(&["sans", "serif", "mono"], "font-family"),
    );

    rules.push(
        GroupRule::new("bg")
            .keywords(&["auto", "cover", "contain"], "background-size")
            .keywords(&["fixed", "local", "scroll"], "background-attachment")
            .keywords(
                &[
                    "center",
                    "top",
                    "bottom",
                    "left",
                    "right",
                    "left-top",
                    "left-bottom",
                    "right-top",
                    "right-bottom",
                ],
                "background-position",
            )
            .keywords(
                &["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"],
                "background-repeat",
            )
            .keywords(&["none"], "background-image")
            .otherwise("background-color"),
    );

    rules.push(
        width_cases(
            GroupRule::new("border").when(ValueKind::Bare, "border-width"),
            "border-width",
        )
        .keywords(BORDER_STYLES, "border-style")
        .keywords(&["collapse", "separate"], "border-collapse")
        .otherwise("border-color"),
    );
    for (stem, side) in BORDER_SIDES {
        let width = format!("border-{side}-width");
        rules.push(
            width_cases(GroupRule::new(*stem).when(ValueKind::Bare, &width), &width)
                .otherwise(format!("border-{side}-color")),
        );
    }

    rules.push(
        width_cases(
            GroupRule::new("ring").when(ValueKind::Bare, "ring-width"),
            "ring-width",
        )
        .keywords(&["inset"], "ring-inset")
        .otherwise("ring-color"),
    );
    rules.push(
        width_cases(GroupRule::new("ring-offset"), "ring-offset-width")
            .otherwise("ring-offset-color"),
    );
    rules.push(
        width_cases(
            GroupRule::new("outline")
                .when(ValueKind::Bare, "outline-style")
                .keywords(OUTLINE_STYLES, "outline-style"),
            "outline-width",
        )
        .otherwise("outline-color"),
    );

    rules.push(
        GroupRule::new("shadow")
            .when(ValueKind::Bare, "box-shadow")
            .keywords(SHADOW_SIZES, "box-shadow")
            .when(ValueKind::Arbitrary, "box-shadow")
            .otherwise("box-shadow-color"),
    );
    rules.push(
        GroupRule::new("transition")
            .when(ValueKind::Bare, "transition-property")
            .keywords(
                &["none", "all", "colors", "opacity", "shadow", "transform"],
                "transition-property",
            ),
    );

    for rule in &mut rules {
        for case in &mut rule.cases {
            if let Some((_, narrower)) = CONFLICTS.iter().find(|(group, _)| *group == case.group) {
                case.conflicts = narrower.iter().map(|g| g.to_string()).collect();
            }
        }
    }

    rules
}
