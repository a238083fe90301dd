#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{
        schema::{AliasKey, AliasPolicy, Argument, NamedPlaceholder, Schema},
        translator::{QueryValues, TranslateError, Translator},
    };

    const ALL_OPERATORS: &str = "q=a__eq__1|b__gt__2|c__gte__3|d__lt__4|e__lte__5|d__co__abc|f__ico__cde|g__in__[a,b,c]|h__ni__[a,b,c]|i__ne__h";

    fn lenient() -> Translator {
        Translator::new(Schema::new().with_alias_policy(AliasPolicy::PassThrough))
    }

    fn all_operator_arguments() -> Vec<Argument> {
        vec![
            Argument::from("1"),
            Argument::from("2"),
            Argument::from("3"),
            Argument::from("4"),
            Argument::from("5"),
            Argument::from("%abc%"),
            Argument::from("%cde%"),
            Argument::from(["a", "b", "c"]),
            Argument::from(["a", "b", "c"]),
            Argument::from("h"),
        ]
    }

    #[test]
    pub fn test_translates_every_operator_from_a_query_string() {
        let result = lenient().translate_query(ALL_OPERATORS).expect("valid query");

        assert_eq!(
            result.where_clause.text,
            "a = ? AND b > ? AND c >= ? AND d < ? AND e <= ? AND d LIKE ? AND LOWER(f) LIKE ? AND g IN (?) AND h NOT IN (?) AND i <> ?"
        );
        assert_eq!(result.where_clause.arguments, all_operator_arguments());
        // `d` is used twice, the map keeps the later value
        assert_eq!(result.where_clause.argument_map.len(), 9);
        assert_eq!(result.where_clause.argument_map.get("d"), Some(&Argument::from("%abc%")));
    }

    #[test]
    pub fn test_translates_every_operator_from_a_uri() {
        let uri = format!("http://abc.com?{}", ALL_OPERATORS);
        let result = lenient().translate_uri(&uri).expect("valid uri");

        assert_eq!(result.where_clause.arguments, all_operator_arguments());
        assert_eq!(result.where_clause.text.matches(" AND ").count(), 9);
    }

    #[test]
    pub fn test_accepts_origin_form_targets() {
        let result = lenient().translate_uri("/people?q=a__eq__1&s=-a").expect("valid target");

        assert_eq!(result.where_clause.text, "a = ?");
        assert_eq!(result.order_by, "a DESC");
    }

    #[test]
    pub fn test_rejects_invalid_query_string() {
        let err = lenient().translate_query("hfda=#%^&*()0123").unwrap_err();
        assert!(matches!(err, TranslateError::InvalidEscape(_)));
    }

    #[test]
    pub fn test_rejects_non_absolute_uri() {
        let err = lenient().translate_uri(&ALL_OPERATORS[..20]).unwrap_err();
        assert_eq!(err, TranslateError::InvalidUri(url::ParseError::RelativeUrlWithoutBase));
        assert!(lenient().translate_uri("").is_err());
    }

    #[test]
    pub fn test_named_placeholders() {
        let translator = Translator::new(
            Schema::new()
                .with_alias_policy(AliasPolicy::PassThrough)
                .with_placeholder(NamedPlaceholder::new("$")),
        );

        let result = translator
            .translate_query("q=a__eq__1|b__gt__2|c__gte__3|d__lt__4|e__lte__5|f__ico__cde|g__in__[a,b,c]|h__ni__[a,b,c]|i__ne__h")
            .unwrap();

        assert_eq!(
            result.where_clause.text,
            "a = $a AND b > $b AND c >= $c AND d < $d AND e <= $e AND LOWER(f) LIKE $f AND g IN ($g) AND h NOT IN ($h) AND i <> $i"
        );
        let keys: Vec<_> = result.where_clause.argument_map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        assert_eq!(result.where_clause.argument_map.get("i"), Some(&Argument::from("h")));
    }

    #[test]
    pub fn test_mapping_with_default_argument_keys() {
        let translator = Translator::new(
            Schema::new()
                .with_column("a", "age")
                .with_column("n", "name")
                .with_alias_policy(AliasPolicy::PassThrough),
        );

        let result = translator.translate_uri("http://abc.com?q=a__eq__1|b__ne__2|n__co__peter").unwrap();

        assert_eq!(result.where_clause.text, "age = ? AND b <> ? AND name LIKE ?");
        assert_eq!(
            result.where_clause.arguments,
            vec![Argument::from("1"), Argument::from("2"), Argument::from("%peter%")]
        );
        let keys: Vec<_> = result.where_clause.argument_map.keys().cloned().collect();
        assert_eq!(keys, vec!["age", "b", "name"]);
    }

    #[test]
    pub fn test_mapping_with_alias_argument_keys() {
        let translator = Translator::new(
            Schema::new()
                .with_column("a", "age")
                .with_column("n", "name")
                .with_alias_policy(AliasPolicy::PassThrough)
                .with_argument_key(AliasKey),
        );

        let result = translator.translate_uri("http://abc.com?q=a__eq__1|b__ne__2|n__co__peter").unwrap();

        let keys: Vec<_> = result.where_clause.argument_map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "n"]);
        assert_eq!(result.where_clause.argument_map.get("n"), Some(&Argument::from("%peter%")));
    }

    #[test]
    pub fn test_strict_mapping_drops_unmapped_aliases_everywhere() {
        let translator = Translator::new(Schema::new().with_column("a", "age"));

        let result = translator
            .translate_query("q=a__eq__1|b__ne__2&s=-b,a&g=b,a&f=b,a,b__sum&h=b__sum__gt__1")
            .unwrap();

        assert_eq!(result.where_clause.text, "age = ?");
        assert_eq!(result.order_by, "age ASC");
        assert_eq!(result.group_by, "age");
        assert_eq!(result.select, "age");
        assert_eq!(result.having.text, "");
    }

    #[test]
    pub fn test_force_and_default_search() {
        let translator = Translator::new(
            Schema::identity(&["a"])
                .with_force_search("b = ?", "2")
                .with_default_search("c = ?", "3"),
        );

        let with_q = translator.translate_uri("http://abc.com?q=a__eq__1").unwrap();
        assert_eq!(with_q.where_clause.text, "b = ? AND a = ?");
        assert_eq!(with_q.where_clause.arguments, vec![Argument::from("2"), Argument::from("1")]);

        let without_q = translator.translate_uri("http://abc.com").unwrap();
        assert_eq!(without_q.where_clause.text, "b = ? AND c = ?");
        assert_eq!(without_q.where_clause.arguments, vec![Argument::from("2"), Argument::from("3")]);

        let empty_q = translator.translate_query("q=").unwrap();
        assert_eq!(empty_q, without_q);

        let unmatched_q = translator.translate_query("q=zz__eq__1").unwrap();
        assert_eq!(unmatched_q.where_clause.text, "b = ?");
        assert_eq!(unmatched_q.where_clause.arguments, vec![Argument::from("2")]);
    }

    #[test]
    pub fn test_force_and_default_order() {
        let translator = Translator::new(
            Schema::identity(&["c", "d"])
                .with_force_order_by("a ASC")
                .with_default_order_by("b DESC"),
        );

        assert_eq!(translator.translate_uri("http://abc.com").unwrap().order_by, "a ASC,b DESC");
        assert_eq!(translator.translate_uri("http://abc.com?s=-c,d").unwrap().order_by, "a ASC,c DESC,d ASC");
    }

    #[test]
    pub fn test_aggregate_report() {
        let translator = Translator::new(
            Schema::new()
                .with_column("c", "city")
                .with_column("p", "price")
                .with_force_search("deleted = ?", "0"),
        );

        let result = translator
            .translate_query("f=c,p__sum,p__count&g=c&q=p__gt__10&h=p__sum__gte__100|p__count__lt__5&s=-c")
            .unwrap();

        assert_eq!(result.select, "city,SUM(price) AS p__sum,COUNT(price) AS p__count");
        assert_eq!(result.group_by, "city");
        assert_eq!(result.where_clause.text, "deleted = ? AND price > ?");
        assert_eq!(result.having.text, "SUM(price) >= ? AND COUNT(price) < ?");
        assert_eq!(result.having.arguments, vec![Argument::from("100"), Argument::from("5")]);
        let keys: Vec<_> = result.having.argument_map.keys().cloned().collect();
        assert_eq!(keys, vec!["p__sum", "p__count"]);
        assert_eq!(result.order_by, "city DESC");
    }

    #[test]
    pub fn test_only_the_first_value_counts() {
        let translator = Translator::new(Schema::identity(&["a", "b"]));
        let params = QueryValues::new().with("s", "a").with("s", "-b").with("g", "b").with("g", "a");

        let result = translator.translate(&params);

        assert_eq!(result.order_by, "a ASC");
        assert_eq!(result.group_by, "b");
    }

    #[test]
    pub fn test_empty_schema_and_request() {
        let result = Translator::default().translate(&QueryValues::new());

        assert_eq!(result.where_clause.text, "");
        assert!(result.where_clause.arguments.is_empty());
        assert_eq!(result.order_by, "");
        assert_eq!(result.group_by, "");
        assert_eq!(result.select, "");
        assert_eq!(result.having.text, "");
    }

    #[test]
    pub fn test_translation_is_deterministic() {
        let translator = Translator::new(Schema::identity(&["a", "b", "g"]).with_force_search("x IN (?)", ["1", "2"]));
        let params = QueryValues::parse("q=a__eq__1|b__gt__2|g__in__[a,b,c]&s=-a,b&f=a__sum,b&h=a__sum__lt__1").unwrap();

        let first = translator.translate(&params);
        let second = translator.translate(&params);

        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
    }

    #[test]
    pub fn test_serializes_to_json() {
        let translator = Translator::new(Schema::identity(&["a", "g"]));
        let result = translator.translate_query("q=a__eq__1|g__in__[x,y]&s=-a").unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "where": {
                    "text": "a = ? AND g IN (?)",
                    "arguments": ["1", ["x", "y"]],
                    "argumentMap": { "a": "1", "g": ["x", "y"] }
                },
                "having": { "text": "", "arguments": [], "argumentMap": {} },
                "orderBy": "a DESC",
                "groupBy": "",
                "select": ""
            })
        );
    }

    #[test]
    pub fn test_schema_from_json_config() {
        let schema = Schema::from_value(json!({
            "columns": { "a": "age", "c": "city" },
            "forceSearch": { "tenant_id = ?": "7" },
            "defaultOrderBy": ["age DESC"],
            "aggregates": { "total": "SUM" }
        }))
        .unwrap();
        let translator = Translator::from(schema);

        let result = translator.translate_query("f=c,a__total&g=c&h=a__total__gt__3").unwrap();

        assert_eq!(result.where_clause.text, "tenant_id = ?");
        assert_eq!(result.order_by, "age DESC");
        assert_eq!(result.select, "city,SUM(age) AS a__total");
        assert_eq!(result.having.text, "SUM(age) > ?");
    }

    #[test]
    pub fn test_shared_across_threads() {
        let translator = Translator::new(Schema::identity(&["a", "b"]).with_force_order_by("id ASC"));
        let expected = translator.translate_query("q=a__lt__5&s=b").unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| translator.translate_query("q=a__lt__5&s=b").unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
