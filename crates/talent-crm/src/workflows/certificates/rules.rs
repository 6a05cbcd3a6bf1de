use super::normalizer::fold_case;
use super::vocabulary::VocabularyError;

/// Any-of keywords guarded by none-of exclusions, resolving to `outcome`.
#[derive(Debug, Clone)]
pub(crate) struct KeywordRule<T> {
    outcome: T,
    keywords: Vec<String>,
    excludes: Vec<String>,
}

impl<T: Copy> KeywordRule<T> {
    fn matches(&self, text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| text.contains(keyword.as_str()))
            && !self
                .excludes
                .iter()
                .any(|exclude| text.contains(exclude.as_str()))
    }
}

/// Case handling applied to keywords when a table is compiled. It must match
/// how the caller prepares the text it scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeywordCase {
    Folded,
    Exact,
}

/// Ordered rules evaluated top-down; the first rule that matches wins.
#[derive(Debug, Clone)]
pub(crate) struct RuleTable<T> {
    rules: Vec<KeywordRule<T>>,
}

impl<T: Copy> RuleTable<T> {
    pub(crate) fn builder(table: &'static str, case: KeywordCase) -> RuleTableBuilder<T> {
        RuleTableBuilder {
            table,
            case,
            rules: Vec::new(),
        }
    }

    pub(crate) fn first_match(&self, text: &str) -> Option<T> {
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.outcome)
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }
}

#[derive(Debug)]
pub(crate) struct RuleTableBuilder<T> {
    table: &'static str,
    case: KeywordCase,
    rules: Vec<KeywordRule<T>>,
}

impl<T: Copy> RuleTableBuilder<T> {
    pub(crate) fn rule(
        mut self,
        outcome: T,
        keywords: &[String],
        excludes: &[String],
    ) -> Result<Self, VocabularyError> {
        let position = self.rules.len();
        let keywords = self.prepare(keywords, position)?;
        let excludes = self.prepare(excludes, position)?;
        if keywords.is_empty() {
            return Err(VocabularyError::NoKeywords {
                table: self.table,
                position,
            });
        }

        self.rules.push(KeywordRule {
            outcome,
            keywords,
            excludes,
        });
        Ok(self)
    }

    pub(crate) fn build(self) -> RuleTable<T> {
        RuleTable { rules: self.rules }
    }

    fn prepare(&self, values: &[String], position: usize) -> Result<Vec<String>, VocabularyError> {
        values
            .iter()
            .map(|value| {
                if value.trim().is_empty() {
                    return Err(VocabularyError::EmptyKeyword {
                        table: self.table,
                        position,
                    });
                }
                Ok(match self.case {
                    KeywordCase::Folded => fold_case(value),
                    KeywordCase::Exact => value.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = RuleTable::builder("test", KeywordCase::Exact)
            .rule(1, &words(&["alpha"]), &[])
            .and_then(|builder| builder.rule(2, &words(&["alpha", "beta"]), &[]))
            .expect("rules compile")
            .build();

        assert_eq!(table.first_match("alpha beta"), Some(1));
        assert_eq!(table.first_match("beta"), Some(2));
        assert_eq!(table.first_match("gamma"), None);
    }

    #[test]
    fn exclusions_skip_to_the_next_rule() {
        let table = RuleTable::builder("test", KeywordCase::Exact)
            .rule("generic", &words(&["工程师"]), &words(&["初级"]))
            .and_then(|builder| builder.rule("junior", &words(&["初级工程师"]), &[]))
            .expect("rules compile")
            .build();

        assert_eq!(table.first_match("中级工程师"), Some("generic"));
        assert_eq!(table.first_match("初级工程师"), Some("junior"));
    }

    #[test]
    fn folded_tables_lower_case_their_keywords() {
        let table = RuleTable::builder("test", KeywordCase::Folded)
            .rule((), &words(&["三类人员A"]), &[])
            .expect("rules compile")
            .build();

        assert_eq!(table.first_match("三类人员a类"), Some(()));
        assert_eq!(table.first_match("三类人员A类"), None);
    }

    #[test]
    fn rejects_blank_keywords_and_empty_rules() {
        let blank = RuleTable::<u8>::builder("levels", KeywordCase::Folded)
            .rule(0, &words(&["一建", " "]), &[])
            .expect_err("blank keyword rejected");
        assert!(matches!(
            blank,
            VocabularyError::EmptyKeyword {
                table: "levels",
                position: 0
            }
        ));

        let empty = RuleTable::<u8>::builder("levels", KeywordCase::Folded)
            .rule(0, &[], &[])
            .expect_err("rule without keywords rejected");
        assert!(matches!(empty, VocabularyError::NoKeywords { .. }));
    }
}
