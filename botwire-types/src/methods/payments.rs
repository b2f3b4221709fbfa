use crate::types::{ChatId, InlineKeyboardMarkup, LabeledPrice, Message, ShippingOption};

remote_call! {
    SendInvoice("sendInvoice") -> Message {
        required {
            chat_id: ChatId,
            title: String,
            description: String,
            /// Bot-defined payload, 1-128 bytes. Not displayed to the user.
            payload: String,
            provider_token: String,
            currency: String,
            prices: Vec<LabeledPrice>,
        }
        optional {
            max_tip_amount: i32,
            /// At most 4 positive amounts, in increasing order.
            suggested_tip_amounts: Vec<i32>,
            start_parameter: String,
            provider_data: String,
            photo_url: String,
            photo_size: i32,
            photo_width: i32,
            photo_height: i32,
            need_name: bool,
            need_phone_number: bool,
            need_email: bool,
            need_shipping_address: bool,
            send_phone_number_to_provider: bool,
            send_email_to_provider: bool,
            is_flexible: bool,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            /// The first button must be a Pay button.
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

remote_call! {
    /// Reply to a shipping query sent for an invoice with a flexible price.
    AnswerShippingQuery("answerShippingQuery") -> bool {
        required {
            shipping_query_id: String,
            ok: bool,
        }
        optional {
            /// Required if `ok` is `true`.
            shipping_options: Vec<ShippingOption>,
            /// Required if `ok` is `false`.
            error_message: String,
        }
    }
}

remote_call! {
    /// Respond to a pre-checkout query within 10 seconds.
    AnswerPreCheckoutQuery("answerPreCheckoutQuery") -> bool {
        required {
            pre_checkout_query_id: String,
            ok: bool,
        }
        optional {
            error_message: String,
        }
    }
}
