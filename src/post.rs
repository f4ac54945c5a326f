use crate::error::Error;
use crate::friends::{self, FriendGroup};
use crate::utils::parse_bool;
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde_json::{Map, Value};

/// Optional arguments for [`Session::post_event`][crate::Session::post_event]
/// and [`Session::edit_event`][crate::Session::edit_event].
///
/// The `preformatted`, `comments` and `email` toggles accept loose yes/no
/// tokens (`"yes"`, `"on"`, `"f"`, ...). `metadata` is passed to the
/// server as-is and can carry fields like `current_mood` or
/// `picture_keyword`; when a metadata key overlaps with one of the
/// symbolic toggles, use one or the other, not both.
#[derive(Debug, Clone, Default)]
pub struct PostOptions {
    /// Subject line of the post.
    pub subject: Option<String>,
    /// Journal to post to, when not the user's own.
    pub journal: Option<String>,
    /// `public`, `private`, `friends`, or a list of friend-group names.
    pub security: Option<String>,
    /// Time of the post; defaults to the local time when omitted.
    pub date: Option<NaiveDateTime>,
    /// The event text is already formatted as HTML (yes/no).
    pub preformatted: Option<String>,
    /// Allow comments (yes/no).
    pub comments: Option<String>,
    /// Email comments to the author (yes/no).
    pub email: Option<String>,
    /// Screen comments from `all`, `none`, `anonymous` or `non-friends`.
    pub screening: Option<String>,
    /// Free-form property fields sent to the server unchecked.
    pub metadata: Option<Map<String, Value>>,
    /// Id of the entry to edit. Required when editing, absent otherwise.
    pub itemid: Option<i64>,
}

/// The slice of session state the request builder needs.
pub(crate) struct PostContext<'a> {
    pub username: &'a str,
    pub use_journals: &'a [String],
    pub friend_groups: &'a [FriendGroup],
}

/// Map an event and its options onto the wire schema shared by the post
/// and edit calls. Pure; validation failures are reported before any
/// network traffic happens. The caller attaches the challenge/response
/// pair once validation has passed.
pub(crate) fn build_event(
    ctx: &PostContext<'_>,
    event: &str,
    options: &PostOptions,
) -> Result<Map<String, Value>, Error> {
    let mut post = Map::new();
    let mut props = options.metadata.clone().unwrap_or_default();

    let t = options
        .date
        .unwrap_or_else(|| Local::now().naive_local());

    post.insert("username".to_string(), Value::from(ctx.username));
    post.insert("auth_method".to_string(), Value::from("challenge"));
    post.insert("lineendings".to_string(), Value::from("unix"));
    post.insert("event".to_string(), Value::from(event));
    if let Some(subject) = &options.subject {
        post.insert("subject".to_string(), Value::from(subject.as_str()));
    }
    post.insert("year".to_string(), Value::from(t.year()));
    post.insert("mon".to_string(), Value::from(t.month()));
    post.insert("day".to_string(), Value::from(t.day()));
    post.insert("hour".to_string(), Value::from(t.hour()));
    post.insert("min".to_string(), Value::from(t.minute()));

    if let Some(journal) = &options.journal {
        if ctx.use_journals.iter().any(|j| j == journal) {
            post.insert("usejournal".to_string(), Value::from(journal.as_str()));
        } else {
            return Err(Error::InvalidJournal(journal.clone()));
        }
    }

    if let Some(flag) = options.preformatted.as_deref().and_then(parse_bool) {
        props.insert("opt_preformatted".to_string(), Value::Bool(flag));
    }
    // comments/email are "suppress" flags server-side, so they invert
    if let Some(flag) = options.comments.as_deref().and_then(parse_bool) {
        props.insert("opt_nocomments".to_string(), Value::Bool(!flag));
    }
    if let Some(flag) = options.email.as_deref().and_then(parse_bool) {
        props.insert("opt_noemail".to_string(), Value::Bool(!flag));
    }

    if let Some(security) = &options.security {
        let level = security.to_lowercase();
        let value = match level.as_str() {
            "public" | "private" => level.clone(),
            "friends" => {
                post.insert("allowmask".to_string(), Value::from(1));
                String::from("usemask")
            },
            _ => {
                let mask = friends::group_mask(&level, ctx.friend_groups)?;
                post.insert("allowmask".to_string(), Value::from(mask));
                String::from("usemask")
            },
        };
        post.insert("security".to_string(), Value::from(value));
    }

    if let Some(screening) = &options.screening {
        let code = match screening.to_lowercase().as_str() {
            "all" | "a" => "A",
            "none" | "n" => "N",
            "anonymous" | "r" => "R",
            "non-friends" | "f" => "F",
            _ => return Err(Error::BadScreening(screening.clone())),
        };
        props.insert("opt_screening".to_string(), Value::from(code));
    }

    props.retain(|_, value| !value.is_null());

    if let Some(itemid) = options.itemid {
        post.insert("itemid".to_string(), Value::from(itemid));
    }
    if !props.is_empty() {
        post.insert("props".to_string(), Value::Object(props));
    }

    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn journals() -> Vec<String> {
        vec![String::from("frank"), String::from("a_community")]
    }

    fn groups() -> Vec<FriendGroup> {
        vec![
            FriendGroup {
                name: String::from("work"),
                id: 2,
                public: false,
                sort_order: 0,
            },
            FriendGroup {
                name: String::from("home"),
                id: 3,
                public: false,
                sort_order: 5,
            },
        ]
    }

    fn build(options: &PostOptions) -> Result<Map<String, Value>, Error> {
        let journals = journals();
        let groups = groups();
        let ctx = PostContext {
            username: "frank",
            use_journals: &journals,
            friend_groups: &groups,
        };
        build_event(&ctx, "An entry.", options)
    }

    #[test]
    fn base_fields_are_always_present() {
        let options = PostOptions {
            date: NaiveDate::from_ymd_opt(2004, 1, 3)
                .unwrap()
                .and_hms_opt(9, 30, 0),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();

        assert_eq!(got["username"], json!("frank"));
        assert_eq!(got["auth_method"], json!("challenge"));
        assert_eq!(got["lineendings"], json!("unix"));
        assert_eq!(got["event"], json!("An entry."));
        assert_eq!(got["year"], json!(2004));
        assert_eq!(got["mon"], json!(1));
        assert_eq!(got["day"], json!(3));
        assert_eq!(got["hour"], json!(9));
        assert_eq!(got["min"], json!(30));
        assert!(!got.contains_key("subject"));
        assert!(!got.contains_key("props"));
        assert!(!got.contains_key("itemid"));
    }

    #[test]
    fn friends_security_sets_mask_one() {
        let options = PostOptions {
            security: Some(String::from("Friends")),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();

        assert_eq!(got["security"], json!("usemask"));
        assert_eq!(got["allowmask"], json!(1));
    }

    #[test]
    fn public_and_private_pass_through_lowercased() {
        for level in &["Public", "private"] {
            let options = PostOptions {
                security: Some(level.to_string()),
                ..PostOptions::default()
            };

            let got = build(&options).unwrap();

            assert_eq!(got["security"], json!(level.to_lowercase()));
            assert!(!got.contains_key("allowmask"));
        }
    }

    #[test]
    fn group_security_builds_an_allowmask() {
        let options = PostOptions {
            security: Some(String::from("work")),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();

        assert_eq!(got["security"], json!("usemask"));
        assert_eq!(got["allowmask"], json!(4));
    }

    #[test]
    fn unknown_group_security_fails() {
        let options = PostOptions {
            security: Some(String::from("nemesis")),
            ..PostOptions::default()
        };

        let err = build(&options).unwrap_err();

        assert_eq!(err.code(), 105);
    }

    #[test]
    fn valid_journal_becomes_usejournal() {
        let options = PostOptions {
            journal: Some(String::from("a_community")),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();

        assert_eq!(got["usejournal"], json!("a_community"));
    }

    #[test]
    fn unknown_journal_fails_and_names_it() {
        let options = PostOptions {
            journal: Some(String::from("somebody_else")),
            ..PostOptions::default()
        };

        let err = build(&options).unwrap_err();

        assert_eq!(err.code(), 103);
        assert_eq!(err.to_string(), "invalid journal name 'somebody_else'");
    }

    #[test]
    fn screening_tokens_map_to_single_letter_codes() {
        for (token, code) in &[
            ("All", "A"),
            ("none", "N"),
            ("anonymous", "R"),
            ("non-friends", "F"),
            ("a", "A"),
            ("N", "N"),
            ("r", "R"),
            ("f", "F"),
        ] {
            let options = PostOptions {
                screening: Some(token.to_string()),
                ..PostOptions::default()
            };

            let got = build(&options).unwrap();

            assert_eq!(got["props"]["opt_screening"], json!(code), "token: {}", token);
        }
    }

    #[test]
    fn bogus_screening_fails() {
        let options = PostOptions {
            screening: Some(String::from("bogus")),
            ..PostOptions::default()
        };

        let err = build(&options).unwrap_err();

        assert_eq!(err.code(), 104);
    }

    #[test]
    fn comment_and_email_toggles_invert() {
        let options = PostOptions {
            preformatted: Some(String::from("yes")),
            comments: Some(String::from("yes")),
            email: Some(String::from("no")),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();

        assert_eq!(got["props"]["opt_preformatted"], json!(true));
        assert_eq!(got["props"]["opt_nocomments"], json!(false));
        assert_eq!(got["props"]["opt_noemail"], json!(true));
    }

    #[test]
    fn unrecognized_toggles_set_no_flag() {
        let options = PostOptions {
            comments: Some(String::from("banana")),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();

        assert!(!got.contains_key("props"));
    }

    #[test]
    fn metadata_seeds_the_props_bag_and_nulls_are_pruned() {
        let mut metadata = Map::new();
        metadata.insert(String::from("current_mood"), json!("sleepy"));
        metadata.insert(String::from("current_music"), json!("1812 Overture"));
        metadata.insert(String::from("picture_keyword"), Value::Null);
        let options = PostOptions {
            metadata: Some(metadata),
            screening: Some(String::from("all")),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();
        let props = got["props"].as_object().unwrap();

        assert_eq!(props["current_mood"], json!("sleepy"));
        assert_eq!(props["current_music"], json!("1812 Overture"));
        assert_eq!(props["opt_screening"], json!("A"));
        assert!(!props.contains_key("picture_keyword"));
    }

    #[test]
    fn itemid_is_passed_through_verbatim() {
        let options = PostOptions {
            itemid: Some(42),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();

        assert_eq!(got["itemid"], json!(42));
    }

    #[test]
    fn subject_is_included_when_present() {
        let options = PostOptions {
            subject: Some(String::from("Saturday plans")),
            ..PostOptions::default()
        };

        let got = build(&options).unwrap();

        assert_eq!(got["subject"], json!("Saturday plans"));
    }
}
