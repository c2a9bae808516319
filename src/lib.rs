pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod availability;
            pub mod booking;
            pub mod decision;
            pub mod errors;
            pub mod events;
            pub mod evolve;
            pub mod guest;
            pub mod history;
            pub mod room;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod register_guest {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod make_booking {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod quote;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_booking {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod reporting {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
                pub mod views;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod ledger;
                pub mod ledger_in_memory;
            }
        }
    }
}

pub mod shell;
