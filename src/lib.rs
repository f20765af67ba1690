pub mod config;

pub mod shared {
    pub mod core {
        pub mod geo;
        pub mod period;
    }
    pub mod infrastructure {
        pub mod capture;
        pub mod intent_outbox;
        pub mod ledger;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod calendar;
            pub mod entries;
            pub mod evolve;
            pub mod geofence;
            pub mod intents;
            pub mod records;
            pub mod state;
        }
        pub mod use_cases {
            pub mod punch {
                pub mod capture;
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reconcile_period {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
                pub mod reconcile;
            }
            pub mod calendar_grid {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod intent_outbox;
                pub mod punch_ledger;
                pub mod records_in_memory;
            }
        }
    }
}

pub mod shell;
