//! Test fixtures - template sets for offline generation.
//!
//! Every set has an entry template named `ENTRY_TEMPLATE` holding exactly
//! one script block; rendering it offline must give the bundle markup
//! followed by a single newline.

use precompress::RenderContext;

pub const ENTRY_TEMPLATE: &str = "test_compressor_offline.html";

/// A template set plus the bundle fingerprint its entry block produces
pub struct OfflineCase {
    pub templates: &'static [(&'static str, &'static str)],
    /// Offline context variables (`key`, `value`)
    pub context: &'static [(&'static str, &'static str)],
    pub expected_hash: &'static str,
}

impl OfflineCase {
    pub fn context(&self) -> RenderContext {
        self.context
            .iter()
            .fold(RenderContext::new(), |ctx, (k, v)| ctx.with(*k, *v))
    }

    pub fn expected_url(&self) -> String {
        format!("/media/CACHE/js/{}.js", self.expected_hash)
    }

    pub fn expected_markup(&self) -> String {
        format!(
            "<script type=\"text/javascript\" src=\"{}\"></script>",
            self.expected_url()
        )
    }
}

pub const BASIC: OfflineCase = OfflineCase {
    templates: &[(
        ENTRY_TEMPLATE,
        r#"{% load compress %}{% compress js %}
<script type="text/javascript">
    alert("Basic test");
</script>
{% endcompress %}
"#,
    )],
    context: &[],
    expected_hash: "a19e70c58eaa",
};

/// Manifest key of `BASIC`'s single block
pub const BASIC_KEY: &str = "f1922246667e";

pub const BLOCK_SUPER: OfflineCase = OfflineCase {
    templates: &[
        (
            "base.html",
            r#"{% block js %}<script type="text/javascript">alert("test using block.super");</script>{% endblock %}
"#,
        ),
        (
            ENTRY_TEMPLATE,
            r#"{% extends "base.html" %}{% load compress %}
{% block js %}{% compress js %}{{ block.super }}<script type="text/javascript">alert("this alert shouldn't be alone!");</script>{% endcompress %}{% endblock %}
"#,
        ),
    ],
    context: &[],
    expected_hash: "bac43b953925",
};

pub const CONDITION: OfflineCase = OfflineCase {
    templates: &[(
        ENTRY_TEMPLATE,
        r#"{% load compress %}{% compress js %}{% if condition == "red" %}<script type="text/javascript">var color = "{{ condition }}";</script>{% else %}<script type="text/javascript">var color = "blue";</script>{% endif %}{% endcompress %}
"#,
    )],
    context: &[("condition", "red")],
    expected_hash: "86d4eb841dd1",
};

/// Fingerprint of `CONDITION`'s bundle when `condition` is not "red"
pub const CONDITION_BLUE_HASH: &str = "f296dbcc6ebb";

pub const INCLUDE: OfflineCase = OfflineCase {
    templates: &[
        (
            "snippet.html",
            r#"<script type="text/javascript">alert("included");</script>"#,
        ),
        (
            ENTRY_TEMPLATE,
            r#"{% load compress %}{% compress js %}{% include "snippet.html" %}{% endcompress %}
"#,
        ),
    ],
    context: &[],
    expected_hash: "1e1abdda6591",
};

pub const WITH_CONTEXT: OfflineCase = OfflineCase {
    templates: &[(
        ENTRY_TEMPLATE,
        r#"{% load compress %}{% compress js %}<script type="text/javascript">var obj = {value: "{{ content }}"};</script>{% endcompress %}
"#,
    )],
    context: &[("content", "OK!")],
    expected_hash: "73604e06a6c4",
};

/// Broken templates next to a valid one; only the valid one is compressed
pub const ERROR_HANDLING: OfflineCase = OfflineCase {
    templates: &[
        (
            "buggy_template.html",
            r#"{% load compress %}{% compress js %}<script type="text/javascript">{% if broken %}</script>{% endcompress %}
"#,
        ),
        ("unknown_tag.html", "{% frobnicate %}\n"),
        (
            ENTRY_TEMPLATE,
            r#"{% load compress %}{% compress js %}<script type="text/javascript">alert("error handling");</script>{% endcompress %}
"#,
        ),
    ],
    context: &[],
    expected_hash: "04cd302c1c09",
};

pub const ALL_CASES: &[(&str, &OfflineCase)] = &[
    ("basic", &BASIC),
    ("block_super", &BLOCK_SUPER),
    ("condition", &CONDITION),
    ("include", &INCLUDE),
    ("with_context", &WITH_CONTEXT),
    ("error_handling", &ERROR_HANDLING),
];
