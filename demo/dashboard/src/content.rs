//! Static explanatory text for the dashboard.

/// Dashboard title
pub const APP_TITLE: &str = "Derivatives Risk Assessment Tool";

/// Intro paragraph on the concepts screen
pub const WELCOME: &str = "This dashboard helps you explore the risk of a synthetic derivative \
position. Adjust the inputs in the sidebar and watch how market conditions and contract terms \
change the portfolio outcome. It is an educational tool built on synthetic data.";

/// What a user should take away
pub const LEARNING_OUTCOMES: [&str; 4] = [
    "Understand the main risk factors of a derivative position.",
    "See how changing an input moves portfolio value and risk.",
    "Read risk from interactive charts.",
    "Recognise how sensitive an option position is to market variables.",
];

/// Risk factor name and explanation, in sidebar order
pub const RISK_FACTORS: [(&str, &str); 8] = [
    (
        "Notional Amount",
        "Contract size. Scales every gain and loss.",
    ),
    (
        "Underlying Asset",
        "The asset the derivative is written on. Each has its own risk profile.",
    ),
    (
        "Option Type",
        "A Call gains when the price rises above the strike; a Put gains when it falls below.",
    ),
    (
        "Strike Price",
        "Exercise price. Near the current price the option reacts most to price moves.",
    ),
    (
        "Expiration Date",
        "Time left on the contract. Longer horizons usually add value and risk.",
    ),
    (
        "Volatility",
        "How much the underlying price fluctuates. More volatility adds value and risk.",
    ),
    (
        "Interest Rate",
        "Drives carry cost and the present value of future payoffs.",
    ),
    (
        "Market Scenarios",
        "Economic regimes that can shift derivative values sharply.",
    ),
];

/// Key concept name and explanation
pub const KEY_CONCEPTS: [(&str, &str); 4] = [
    (
        "Option Payoff",
        "What the holder receives at exercise or expiry: price minus strike for a Call, \
         strike minus price for a Put, never below zero.",
    ),
    (
        "Volatility Impact",
        "Bigger price swings make a large move more likely, which raises option value. \
         The dashboard scales the payoff by (1 + volatility) to show the direction of the effect.",
    ),
    (
        "Interest Rate Influence",
        "Rates change the present value of future payoffs. The dashboard applies a simple \
         exp(rate) factor; real effects differ between Calls and Puts.",
    ),
    (
        "Scenarios and Stress Testing",
        "Looking at a portfolio under several market regimes shows how it may behave in \
         extreme conditions. The scenario chart is qualitative.",
    ),
];

/// Caption under the payoff chart
pub const CURVE_CAPTION: &str = "How portfolio value changes with the underlying price: \
the profit and loss profile of the position.";

/// Caption under the scenario chart
pub const SCENARIO_CAPTION: &str = "Simplified, qualitative view of how each selected \
scenario might affect portfolio risk.";

/// Disclaimer shown on every screen footer and in full on the concepts screen
pub const DISCLAIMER: &str = "Educational use only. The payoff model is simplified and is not \
Black-Scholes; real pricing and risk management need proper models and market data. \
Consult a financial professional before making investment decisions.";
