use crate::types::InlineQueryResult;

remote_call! {
    /// Send answers to an inline query. At most 50 results.
    AnswerInlineQuery("answerInlineQuery") -> bool {
        required {
            inline_query_id: String,
            results: Vec<InlineQueryResult>,
        }
        optional {
            /// Seconds the result may be cached on the server. Defaults to 300.
            cache_time: i32,
            is_personal: bool,
            next_offset: String,
            switch_pm_text: String,
            switch_pm_parameter: String,
        }
    }
}
