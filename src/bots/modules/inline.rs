use teloxide::types::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InputMessageContent, InputMessageContentText,
};
use tracing::info;

use crate::bots::{texts::Texts, BotContext, BotHandlerInternal};

fn articles(texts: &Texts) -> Vec<InlineQueryResult> {
    texts
        .inline_results
        .iter()
        .enumerate()
        .map(|(index, (title, text))| {
            InlineQueryResult::Article(InlineQueryResultArticle::new(
                (index + 1).to_string(),
                *title,
                InputMessageContent::Text(InputMessageContentText::new(*text)),
            ))
        })
        .collect()
}

pub async fn inline_query_handler(query: &InlineQuery, ctx: &BotContext) -> BotHandlerInternal {
    info!(from = query.from.id.0, query = %query.query, "Received inline query");

    ctx.api
        .answer_inline_query(query.id.clone(), articles(ctx.texts()), 0)
        .await
}

pub fn chosen_inline_result_handler(result: &ChosenInlineResult) {
    info!(
        result_id = %result.result_id,
        from = result.from.id.0,
        "Chosen inline result"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::{
        testing::*,
        texts::{ENGLISH, PERSIAN},
    };

    #[test]
    fn articles_are_numbered_from_one() {
        let results = articles(&ENGLISH);

        let ids: Vec<String> = results
            .iter()
            .map(|result| match result {
                InlineQueryResult::Article(article) => article.id.to_string(),
                _ => panic!("only articles are expected"),
            })
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn articles_follow_language() {
        let titles = |texts: &Texts| -> Vec<String> {
            articles(texts)
                .into_iter()
                .filter_map(|result| match result {
                    InlineQueryResult::Article(article) => Some(article.title),
                    _ => None,
                })
                .collect()
        };

        assert_eq!(titles(&ENGLISH), vec!["Telegram.Bot", "Awesome"]);
        assert_eq!(titles(&PERSIAN)[0], "تلگرام.بات");
    }

    #[tokio::test]
    async fn inline_query_is_answered_without_cache() {
        let client = RecordingClient::new();
        let query: InlineQuery = parse(inline_query_json());

        inline_query_handler(&query, &context(client.clone()))
            .await
            .unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(
            &calls[0],
            Call::AnswerInlineQuery { query_id, results, cache_time: 0 }
                if query_id == "iq-1" && results.len() == 2
        ));
    }
}
